use common::games::tictactoe::{HumanInput, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Digits, letters and the extra punctuation keys become positions; Esc aborts.
/// `None` for keys that mean nothing on a board.
pub fn decode_move_key(key: &KeyEvent) -> Option<HumanInput> {
    if is_interrupt(key) {
        return Some(HumanInput::Abort);
    }
    match key.code {
        KeyCode::Esc => Some(HumanInput::Abort),
        KeyCode::Char(c) => Position::from_key(c).map(HumanInput::Move),
        _ => None,
    }
}

/// Menu entry `1..=max` picked by a digit key.
pub fn decode_menu_choice(key: &KeyEvent, max: u8) -> Option<u8> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let choice = c.to_digit(10)? as u8;
    (1..=max).contains(&choice).then_some(choice)
}

pub fn is_back_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Backspace | KeyCode::Esc) || is_interrupt(key)
}

pub fn is_quit_key(key: &KeyEvent) -> bool {
    is_interrupt(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_and_letters_decode_to_positions() {
        assert_eq!(
            decode_move_key(&key(KeyCode::Char('7'))),
            Some(HumanInput::Move(Position::new(7)))
        );
        assert_eq!(
            decode_move_key(&key(KeyCode::Char('b'))),
            Some(HumanInput::Move(Position::new(11)))
        );
        assert_eq!(
            decode_move_key(&key(KeyCode::Char('B'))),
            Some(HumanInput::Move(Position::new(11)))
        );
        assert_eq!(
            decode_move_key(&key(KeyCode::Char(']'))),
            Some(HumanInput::Move(Position::new(49)))
        );
    }

    #[test]
    fn test_escape_and_ctrl_c_abort() {
        assert_eq!(decode_move_key(&key(KeyCode::Esc)), Some(HumanInput::Abort));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode_move_key(&ctrl_c), Some(HumanInput::Abort));
        assert!(is_quit_key(&ctrl_c));
        assert!(!is_quit_key(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(decode_move_key(&key(KeyCode::Char('0'))), None);
        assert_eq!(decode_move_key(&key(KeyCode::Char(' '))), None);
        assert_eq!(decode_move_key(&key(KeyCode::Enter)), None);
        assert_eq!(decode_move_key(&key(KeyCode::Left)), None);
    }

    #[test]
    fn test_menu_choice_range() {
        assert_eq!(decode_menu_choice(&key(KeyCode::Char('1')), 7), Some(1));
        assert_eq!(decode_menu_choice(&key(KeyCode::Char('7')), 7), Some(7));
        assert_eq!(decode_menu_choice(&key(KeyCode::Char('8')), 7), None);
        assert_eq!(decode_menu_choice(&key(KeyCode::Char('0')), 7), None);
        assert_eq!(decode_menu_choice(&key(KeyCode::Char('a')), 7), None);
        assert_eq!(decode_menu_choice(&key(KeyCode::Esc), 7), None);
    }

    #[test]
    fn test_back_keys() {
        assert!(is_back_key(&key(KeyCode::Backspace)));
        assert!(is_back_key(&key(KeyCode::Esc)));
        assert!(!is_back_key(&key(KeyCode::Enter)));
    }
}
