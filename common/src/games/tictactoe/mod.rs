mod board;
mod bot_controller;
mod game_state;
mod presenter;
mod scores;
mod session;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, Difficulty, calculate_greedy_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use presenter::{GamePresenter, HumanInput, SoundCue};
pub use scores::ScoreTally;
pub use session::{TicTacToeSession, TicTacToeSessionSettings};
pub use settings::GameSettings;
pub use types::{BoardSize, GameOutcome, Mark, Participant, Position, Symbol, WinningLine};
pub use validate::{MoveError, validate_move};
pub use win_detector::{find_winning_line, has_win};
