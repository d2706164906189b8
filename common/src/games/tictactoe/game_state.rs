use super::board::Board;
use super::types::{BoardSize, GameOutcome, Participant, Position, Symbol, WinningLine};
use super::validate::MoveError;
use super::win_detector::{find_winning_line, has_win};

/// Board plus turn bookkeeping for one game. Player one is X and moves first.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub player_one: Participant,
    pub player_two: Participant,
    pub current_symbol: Symbol,
    pub outcome: GameOutcome,
    pub last_move: Option<Position>,
    pub move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(size: BoardSize, player_one: Participant, player_two: Participant) -> Self {
        Self {
            board: Board::new(size),
            player_one,
            player_two,
            current_symbol: Symbol::X,
            outcome: GameOutcome::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn current_participant(&self) -> &Participant {
        self.participant(self.current_symbol)
    }

    pub fn participant(&self, symbol: Symbol) -> &Participant {
        match symbol {
            Symbol::X => &self.player_one,
            Symbol::O => &self.player_two,
        }
    }

    /// Plays the current symbol at `position` and returns the resulting outcome.
    pub fn place_mark(&mut self, position: Position) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            return Ok(self.outcome);
        }

        let symbol = self.current_symbol;
        self.board.place_mark(position, symbol)?;
        self.last_move = Some(position);
        self.move_count += 1;

        self.check_game_over(symbol);

        if self.outcome == GameOutcome::InProgress {
            self.current_symbol = symbol.opponent();
        }

        Ok(self.outcome)
    }

    /// Ends the game without a result. Has no effect once the game is over.
    pub fn abort(&mut self) {
        if self.outcome == GameOutcome::InProgress {
            self.outcome = GameOutcome::Aborted;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            GameOutcome::PlayerOneWins => find_winning_line(&self.board, Symbol::X),
            GameOutcome::PlayerTwoWins => find_winning_line(&self.board, Symbol::O),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<&Participant> {
        match self.outcome {
            GameOutcome::PlayerOneWins => Some(&self.player_one),
            GameOutcome::PlayerTwoWins => Some(&self.player_two),
            _ => None,
        }
    }

    fn check_game_over(&mut self, mover: Symbol) {
        if has_win(&self.board, mover) {
            self.outcome = GameOutcome::won_by(mover);
            return;
        }

        if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        }
    }
}
