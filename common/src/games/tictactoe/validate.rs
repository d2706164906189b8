use derive_more::{Display, Error};

use super::board::Board;
use super::types::{Mark, Position};

/// Why a move cannot be played. Recovered by asking the player again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("position is outside the board")]
    OutOfRange,
    #[display("that position is already taken")]
    CellOccupied,
}

pub fn validate_move(board: &Board, position: Position) -> Result<(), MoveError> {
    match board.get(position) {
        None => Err(MoveError::OutOfRange),
        Some(Mark::Empty) => Ok(()),
        Some(_) => Err(MoveError::CellOccupied),
    }
}
