use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{BotInput, Difficulty, calculate_move};
use super::game_state::TicTacToeGameState;
use super::presenter::{GamePresenter, HumanInput, SoundCue};
use super::scores::ScoreTally;
use super::settings::GameSettings;
use super::types::{BoardSize, GameOutcome, Participant, Position};
use super::validate::validate_move;

/// The part of [`GameSettings`] a session reads when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub board_size: BoardSize,
    pub difficulty: Difficulty,
}

impl From<&GameSettings> for TicTacToeSessionSettings {
    fn from(settings: &GameSettings) -> Self {
        Self {
            board_size: settings.board_size,
            difficulty: settings.difficulty,
        }
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Plays one game to its end and records a finished result in `scores`.
    pub fn run(
        player_one: Participant,
        player_two: Participant,
        settings: TicTacToeSessionSettings,
        scores: &mut ScoreTally,
        rng: &mut SessionRng,
        presenter: &mut impl GamePresenter,
    ) -> GameOutcome {
        let mut state = TicTacToeGameState::new(settings.board_size, player_one, player_two);
        log!(
            "Session started on {} board: {} (X) vs {} (O), seed {}",
            settings.board_size,
            state.player_one.name(),
            state.player_two.name(),
            rng.seed()
        );

        while state.outcome == GameOutcome::InProgress {
            let symbol = state.current_symbol;
            let next_move = if state.current_participant().is_computer() {
                play_computer_turn(&state, settings.difficulty, rng)
            } else {
                play_human_turn(&state, presenter)
            };

            let Some(position) = next_move else {
                state.abort();
                break;
            };

            match state.place_mark(position) {
                Ok(outcome) => {
                    log!("{} placed {} at {}", state.participant(symbol).name(), symbol, position);
                    presenter.move_accepted(&state, position, symbol);
                    presenter.play_cue(SoundCue::MoveMade);
                    match outcome {
                        GameOutcome::PlayerOneWins | GameOutcome::PlayerTwoWins => {
                            presenter.play_cue(SoundCue::GameWon)
                        }
                        GameOutcome::Draw => presenter.play_cue(SoundCue::GameDraw),
                        GameOutcome::InProgress | GameOutcome::Aborted => {}
                    }
                }
                Err(e) => {
                    log!("Move at {} was rejected after validation: {}", position, e);
                    presenter.illegal_move(&state, position, e);
                }
            }
        }

        if scores.record(state.outcome, settings.board_size) {
            scores.set_players(state.player_one.name(), state.player_two.name());
        }
        log!("Session ended: {:?} after {} moves", state.outcome, state.move_count);
        presenter.game_ended(&state);

        state.outcome
    }
}

fn play_computer_turn(
    state: &TicTacToeGameState,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<Position> {
    let input = BotInput::new(&state.board, state.current_symbol);
    let position = calculate_move(difficulty, &input, rng);
    match position {
        Some(position) => log!("Computer ({}) chose {}", difficulty, position),
        None => log!("Computer found no move on a board that is not full"),
    }
    position
}

/// Asks until the human gives a legal cell. `None` means the human aborted.
fn play_human_turn(
    state: &TicTacToeGameState,
    presenter: &mut impl GamePresenter,
) -> Option<Position> {
    let participant = state.current_participant();
    loop {
        match presenter.request_human_move(state, participant.name(), state.current_symbol) {
            HumanInput::Abort => {
                log!("{} left the game", participant.name());
                return None;
            }
            HumanInput::Move(position) => match validate_move(&state.board, position) {
                Ok(()) => return Some(position),
                Err(e) => {
                    log!("{} tried {}: {}", participant.name(), position, e);
                    presenter.illegal_move(state, position, e);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::games::tictactoe::types::Symbol;
    use crate::games::tictactoe::validate::MoveError;

    #[derive(Default)]
    struct ScriptedPresenter {
        inputs: VecDeque<HumanInput>,
        prompts: Vec<(String, Symbol)>,
        accepted: Vec<(Position, Symbol)>,
        rejected: Vec<(Position, MoveError)>,
        cues: Vec<SoundCue>,
        ended: Vec<GameOutcome>,
    }

    impl ScriptedPresenter {
        fn with_moves(moves: &[usize]) -> Self {
            Self {
                inputs: moves
                    .iter()
                    .map(|&n| HumanInput::Move(Position::new(n)))
                    .collect(),
                ..Self::default()
            }
        }

        fn computer_moves(&self) -> Vec<usize> {
            self.accepted
                .iter()
                .filter(|(_, symbol)| *symbol == Symbol::O)
                .map(|(position, _)| position.number())
                .collect()
        }
    }

    impl GamePresenter for ScriptedPresenter {
        fn request_human_move(
            &mut self,
            _state: &TicTacToeGameState,
            name: &str,
            symbol: Symbol,
        ) -> HumanInput {
            self.prompts.push((name.to_string(), symbol));
            self.inputs.pop_front().unwrap_or(HumanInput::Abort)
        }

        fn illegal_move(
            &mut self,
            _state: &TicTacToeGameState,
            position: Position,
            error: MoveError,
        ) {
            self.rejected.push((position, error));
        }

        fn move_accepted(
            &mut self,
            _state: &TicTacToeGameState,
            position: Position,
            symbol: Symbol,
        ) {
            self.accepted.push((position, symbol));
        }

        fn game_ended(&mut self, state: &TicTacToeGameState) {
            self.ended.push(state.outcome);
        }

        fn play_cue(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }
    }

    fn settings(board_size: BoardSize, difficulty: Difficulty) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            board_size,
            difficulty,
        }
    }

    fn run_pvp(moves: &[usize], scores: &mut ScoreTally) -> (GameOutcome, ScriptedPresenter) {
        let mut presenter = ScriptedPresenter::with_moves(moves);
        let mut rng = SessionRng::new(1);
        let outcome = TicTacToeSession::run(
            Participant::human("Ann"),
            Participant::human("Bob"),
            settings(BoardSize::Small, Difficulty::Hard),
            scores,
            &mut rng,
            &mut presenter,
        );
        (outcome, presenter)
    }

    #[test]
    fn test_top_row_win_scores_once_for_player_one() {
        let mut scores = ScoreTally::new();
        let (outcome, presenter) = run_pvp(&[1, 5, 2, 9, 3], &mut scores);

        assert_eq!(outcome, GameOutcome::PlayerOneWins);
        assert_eq!(scores.player_one_wins, 1);
        assert_eq!(scores.player_two_wins, 0);
        assert_eq!(scores.draws, 0);
        assert_eq!(scores.last_board_size, BoardSize::Small);
        assert_eq!(scores.player_one_name, "Ann");
        assert_eq!(scores.player_two_name, "Bob");
        assert_eq!(presenter.ended, vec![GameOutcome::PlayerOneWins]);
        assert_eq!(presenter.cues.last(), Some(&SoundCue::GameWon));
        assert_eq!(presenter.accepted.len(), 5);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut scores = ScoreTally::new();
        let (outcome, presenter) = run_pvp(&[1, 2, 3, 5, 4, 6, 8, 7, 9], &mut scores);

        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.games_played(), 1);
        assert_eq!(presenter.cues.last(), Some(&SoundCue::GameDraw));
    }

    #[test]
    fn test_prompts_alternate_between_players() {
        let mut scores = ScoreTally::new();
        let (_, presenter) = run_pvp(&[1, 5, 2, 9, 3], &mut scores);
        let expected: Vec<(String, Symbol)> = vec![
            ("Ann".to_string(), Symbol::X),
            ("Bob".to_string(), Symbol::O),
            ("Ann".to_string(), Symbol::X),
            ("Bob".to_string(), Symbol::O),
            ("Ann".to_string(), Symbol::X),
        ];
        assert_eq!(presenter.prompts, expected);
    }

    #[test]
    fn test_illegal_moves_are_asked_again() {
        let mut scores = ScoreTally::new();
        let (outcome, presenter) = run_pvp(&[1, 1, 10, 5, 2, 9, 3], &mut scores);

        assert_eq!(outcome, GameOutcome::PlayerOneWins);
        assert_eq!(
            presenter.rejected,
            vec![
                (Position::new(1), MoveError::CellOccupied),
                (Position::new(10), MoveError::OutOfRange),
            ]
        );
        assert_eq!(presenter.accepted.len(), 5);
        assert_eq!(scores.player_one_wins, 1);
    }

    #[test]
    fn test_abort_ends_without_scoring() {
        let mut scores = ScoreTally::new();
        scores.record(GameOutcome::Draw, BoardSize::Large);
        let mut presenter = ScriptedPresenter::with_moves(&[1, 5]);
        presenter.inputs.push_back(HumanInput::Abort);
        let mut rng = SessionRng::new(1);
        let outcome = TicTacToeSession::run(
            Participant::human("Ann"),
            Participant::human("Bob"),
            settings(BoardSize::Small, Difficulty::Easy),
            &mut scores,
            &mut rng,
            &mut presenter,
        );

        assert_eq!(outcome, GameOutcome::Aborted);
        assert_eq!(scores.games_played(), 1);
        assert_eq!(scores.last_board_size, BoardSize::Large);
        assert_eq!(presenter.ended, vec![GameOutcome::Aborted]);
        assert!(!presenter.cues.contains(&SoundCue::GameWon));
    }

    #[test]
    fn test_hard_computer_answers_deterministically() {
        let mut scores = ScoreTally::new();
        let mut presenter = ScriptedPresenter::with_moves(&[1, 2, 7, 6, 8]);
        let mut rng = SessionRng::new(99);
        let outcome = TicTacToeSession::run(
            Participant::human("Ann"),
            Participant::Computer,
            settings(BoardSize::Small, Difficulty::Hard),
            &mut scores,
            &mut rng,
            &mut presenter,
        );

        // center, block 1-2-3, block 1-4-7, first free corner
        assert_eq!(presenter.computer_moves(), vec![5, 3, 4, 9]);
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.player_two_name, "Computer");
        assert_eq!(presenter.prompts.len(), 5);
    }

    #[test]
    fn test_computer_game_always_finishes() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for size in BoardSize::ALL {
                let mut scores = ScoreTally::new();
                let mut presenter = ScriptedPresenter::default();
                let mut rng = SessionRng::new(size.side() as u64);
                let outcome = TicTacToeSession::run(
                    Participant::Computer,
                    Participant::Computer,
                    settings(size, difficulty),
                    &mut scores,
                    &mut rng,
                    &mut presenter,
                );

                assert!(outcome.is_scored(), "{:?} {:?}", difficulty, size);
                assert_eq!(scores.games_played(), 1);
                assert_eq!(scores.last_board_size, size);
                assert!(presenter.prompts.is_empty());
                assert!(presenter.accepted.len() <= size.cell_count());
            }
        }
    }

    #[test]
    fn test_session_settings_from_game_settings() {
        let game_settings = GameSettings {
            difficulty: Difficulty::Easy,
            board_size: BoardSize::Large,
            ..GameSettings::default()
        };
        assert_eq!(
            TicTacToeSessionSettings::from(&game_settings),
            settings(BoardSize::Large, Difficulty::Easy)
        );
    }
}
