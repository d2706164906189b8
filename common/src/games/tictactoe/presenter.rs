use super::game_state::TicTacToeGameState;
use super::types::{Position, Symbol};
use super::validate::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    Move(Position),
    Abort,
}

/// Advisory audio feedback. Presenters with sound disabled ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    MoveMade,
    GameWon,
    GameDraw,
}

/// Input and feedback surface the session drives. Every call blocks until
/// the presenter is done with it.
pub trait GamePresenter {
    /// Waits for the human whose turn it is to pick a cell or abort.
    fn request_human_move(&mut self, state: &TicTacToeGameState, name: &str, symbol: Symbol)
    -> HumanInput;

    fn illegal_move(&mut self, state: &TicTacToeGameState, position: Position, error: MoveError);

    fn move_accepted(&mut self, state: &TicTacToeGameState, position: Position, symbol: Symbol);

    fn game_ended(&mut self, state: &TicTacToeGameState);

    fn play_cue(&mut self, cue: SoundCue);
}
