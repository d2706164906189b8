use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::types::{Position, Symbol};
use super::win_detector::has_win;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

pub struct BotInput<'a> {
    pub board: &'a Board,
    pub computer: Symbol,
    pub opponent: Symbol,
}

impl<'a> BotInput<'a> {
    pub fn new(board: &'a Board, computer: Symbol) -> Self {
        Self {
            board,
            computer,
            opponent: computer.opponent(),
        }
    }
}

/// Picks the computer's next cell, or `None` when the board is full.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_greedy_move(input, rng)
            } else {
                calculate_random_move(input, rng)
            }
        }
        Difficulty::Hard => calculate_greedy_move(input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.available_moves();
    rng.choose(&available_moves).copied()
}

/// One-ply tactics: win, block, center, corner, then random.
pub fn calculate_greedy_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    if let Some(position) = find_winning_move(input.board, input.computer, &available_moves) {
        return Some(position);
    }

    if let Some(position) = find_winning_move(input.board, input.opponent, &available_moves) {
        return Some(position);
    }

    if let Some(position) = find_center_move(input.board) {
        return Some(position);
    }

    if let Some(position) = find_corner_move(input.board) {
        return Some(position);
    }

    calculate_random_move(input, rng)
}

fn find_winning_move(board: &Board, symbol: Symbol, moves: &[Position]) -> Option<Position> {
    moves.iter().copied().find(|&position| {
        board
            .with_mark(position, symbol)
            .is_some_and(|next| has_win(&next, symbol))
    })
}

fn find_center_move(board: &Board) -> Option<Position> {
    let side = board.side();
    if side % 2 == 0 {
        return None;
    }
    let center = side / 2;
    let position = Position::from_row_col(center, center, board.size());
    board.get(position)?.symbol().is_none().then_some(position)
}

fn find_corner_move(board: &Board) -> Option<Position> {
    let last = board.side() - 1;
    let size = board.size();
    [(0, 0), (0, last), (last, 0), (last, last)]
        .into_iter()
        .map(|(row, col)| Position::from_row_col(row, col, size))
        .find(|&position| board.get(position).is_some_and(|mark| mark.symbol().is_none()))
}
