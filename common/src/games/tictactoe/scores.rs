use super::types::{BoardSize, GameOutcome};

/// Results of the finished sessions since the program started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub player_one_name: String,
    pub player_two_name: String,
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub draws: u32,
    pub last_board_size: BoardSize,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_players(&mut self, player_one: &str, player_two: &str) {
        self.player_one_name = player_one.to_string();
        self.player_two_name = player_two.to_string();
    }

    /// Counts a finished session. Returns `false` for outcomes that do not score.
    pub fn record(&mut self, outcome: GameOutcome, size: BoardSize) -> bool {
        match outcome {
            GameOutcome::PlayerOneWins => self.player_one_wins += 1,
            GameOutcome::PlayerTwoWins => self.player_two_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress | GameOutcome::Aborted => return false,
        }
        self.last_board_size = size;
        true
    }

    pub fn games_played(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}
