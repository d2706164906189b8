use std::fmt;

use serde::{Deserialize, Serialize};

/// Keys for positions 36..=49, the cells a 7x7 board has beyond `Z`.
const EXTRA_KEYS: [char; 14] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '=', '[', ']',
];

const LETTER_BASE: usize = 10;
const EXTRA_BASE: usize = LETTER_BASE + 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(&self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Symbol::X => Mark::X,
            Symbol::O => Mark::O,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Symbol::X),
            Mark::O => Some(Symbol::O),
        }
    }
}

impl From<Symbol> for Mark {
    fn from(symbol: Symbol) -> Self {
        symbol.mark()
    }
}

/// Side length of the board. Only these three sizes exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    pub fn side(&self) -> usize {
        match self {
            BoardSize::Small => 3,
            BoardSize::Medium => 5,
            BoardSize::Large => 7,
        }
    }

    /// Consecutive marks needed in one line to win.
    pub fn required_run(&self) -> usize {
        match self {
            BoardSize::Small => 3,
            BoardSize::Medium => 4,
            BoardSize::Large => 5,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    pub fn next(&self) -> BoardSize {
        match self {
            BoardSize::Small => BoardSize::Medium,
            BoardSize::Medium => BoardSize::Large,
            BoardSize::Large => BoardSize::Small,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.side(), self.side())
    }
}

/// 1-based linear cell number, `row * side + col + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    pub fn from_row_col(row: usize, col: usize, size: BoardSize) -> Self {
        Self(row * size.side() + col + 1)
    }

    pub fn number(&self) -> usize {
        self.0
    }

    pub fn is_on(&self, size: BoardSize) -> bool {
        (1..=size.cell_count()).contains(&self.0)
    }

    /// `(row, col)` for a position on a board of `size`, or `None` when out of range.
    pub fn to_row_col(&self, size: BoardSize) -> Option<(usize, usize)> {
        if !self.is_on(size) {
            return None;
        }
        let index = self.0 - 1;
        Some((index / size.side(), index % size.side()))
    }

    /// Decodes a single keystroke. Letters are case-insensitive.
    pub fn from_key(key: char) -> Option<Position> {
        match key {
            '1'..='9' => Some(Self(key as usize - '0' as usize)),
            'a'..='z' => Some(Self(LETTER_BASE + (key as usize - 'a' as usize))),
            'A'..='Z' => Some(Self(LETTER_BASE + (key as usize - 'A' as usize))),
            _ => EXTRA_KEYS
                .iter()
                .position(|&extra| extra == key)
                .map(|offset| Self(EXTRA_BASE + offset)),
        }
    }

    pub fn key(&self) -> Option<char> {
        match self.0 {
            1..=9 => char::from_digit(self.0 as u32, 10),
            n if (LETTER_BASE..EXTRA_BASE).contains(&n) => {
                Some((b'A' + (n - LETTER_BASE) as u8) as char)
            }
            n if n >= EXTRA_BASE => EXTRA_KEYS.get(n - EXTRA_BASE).copied(),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{}", key),
            None => write!(f, "#{}", self.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub symbol: Symbol,
    pub start: Position,
    pub end: Position,
    pub cells: usize,
}

impl WinningLine {
    pub fn new(symbol: Symbol, start: Position, end: Position, cells: usize) -> Self {
        Self {
            symbol,
            start,
            end,
            cells,
        }
    }

    /// Positions covered by the line, from `start` to `end`.
    pub fn positions(&self, size: BoardSize) -> Vec<Position> {
        let (Some((start_row, start_col)), Some((end_row, end_col))) =
            (self.start.to_row_col(size), self.end.to_row_col(size))
        else {
            return Vec::new();
        };
        let steps = self.cells.saturating_sub(1).max(1) as isize;
        let d_row = (end_row as isize - start_row as isize) / steps;
        let d_col = (end_col as isize - start_col as isize) / steps;

        (0..self.cells as isize)
            .map(|k| {
                let row = (start_row as isize + d_row * k) as usize;
                let col = (start_col as isize + d_col * k) as usize;
                Position::from_row_col(row, col, size)
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
    Aborted,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    /// Whether the outcome counts towards the score tally.
    pub fn is_scored(&self) -> bool {
        matches!(
            self,
            GameOutcome::PlayerOneWins | GameOutcome::PlayerTwoWins | GameOutcome::Draw
        )
    }

    pub fn won_by(symbol: Symbol) -> GameOutcome {
        match symbol {
            Symbol::X => GameOutcome::PlayerOneWins,
            Symbol::O => GameOutcome::PlayerTwoWins,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Participant {
    Human { name: String },
    Computer,
}

impl Participant {
    pub const COMPUTER_NAME: &'static str = "Computer";

    pub fn human(name: impl Into<String>) -> Self {
        Participant::Human { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Participant::Human { name } => name,
            Participant::Computer => Self::COMPUTER_NAME,
        }
    }

    pub fn is_computer(&self) -> bool {
        matches!(self, Participant::Computer)
    }
}
