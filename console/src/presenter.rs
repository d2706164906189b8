use std::io;
use std::time::Duration;

use common::games::tictactoe::{
    GameOutcome, GamePresenter, HumanInput, MoveError, Position, SoundCue, Symbol,
    TicTacToeGameState,
};
use common::log;

use crate::colors::{self, Palette};
use crate::input::decode_move_key;
use crate::terminal::Terminal;
use crate::view::render_board;

pub const BACK_TO_MENU: &str = "\nPress backSpace key to back menu...";

/// Draws the game in the terminal and reads moves from the keyboard.
pub struct ConsolePresenter<'a> {
    terminal: &'a mut Terminal,
    palette: Palette,
    sound_enabled: bool,
    computer_move_delay: Duration,
    pending_message: Option<String>,
}

impl<'a> ConsolePresenter<'a> {
    pub fn new(
        terminal: &'a mut Terminal,
        palette: Palette,
        sound_enabled: bool,
        computer_move_delay: Duration,
    ) -> Self {
        Self {
            terminal,
            palette,
            sound_enabled,
            computer_move_delay,
            pending_message: None,
        }
    }

    fn draw_state(&mut self, state: &TicTacToeGameState, highlight: &[Position]) -> io::Result<()> {
        self.terminal.clear()?;
        self.terminal
            .println(&format!("Playing on {} board", state.board.size()))?;
        self.terminal
            .print(&render_board(&state.board, &self.palette, highlight))
    }

    fn read_human_move(
        &mut self,
        state: &TicTacToeGameState,
        name: &str,
        symbol: Symbol,
    ) -> io::Result<HumanInput> {
        self.draw_state(state, &[])?;
        if let Some(message) = self.pending_message.take() {
            self.terminal.println(&self.palette.paint(&message, colors::ALERT))?;
        }
        self.terminal.print(&format!(
            "{}{}{}",
            self.palette.paint(&format!("{}'s turn (", name), colors::TEXT),
            self.palette.symbol(symbol),
            self.palette.paint("): ", colors::TEXT)
        ))?;
        self.terminal.println(
            &self
                .palette
                .paint("\nPress Esc key to exit game.....", colors::ALERT),
        )?;

        loop {
            let key = self.terminal.read_key()?;
            match decode_move_key(&key) {
                Some(HumanInput::Move(position)) => {
                    self.terminal.println(&position.to_string())?;
                    return Ok(HumanInput::Move(position));
                }
                Some(HumanInput::Abort) => return Ok(HumanInput::Abort),
                None if self.sound_enabled => self.terminal.bell()?,
                None => {}
            }
        }
    }

    fn show_computer_move(&mut self, state: &TicTacToeGameState, position: Position) -> io::Result<()> {
        self.draw_state(state, &[])?;
        self.terminal.println(
            &self
                .palette
                .paint(&format!("Computer chooses: {}", position), colors::TEXT),
        )?;
        std::thread::sleep(self.computer_move_delay);
        Ok(())
    }

    fn show_result(&mut self, state: &TicTacToeGameState) -> io::Result<()> {
        let highlight = state
            .winning_line()
            .map(|line| line.positions(state.board.size()))
            .unwrap_or_default();

        self.terminal.clear()?;
        self.terminal
            .println(&format!("Final board ({}):", state.board.size()))?;
        self.terminal
            .print(&render_board(&state.board, &self.palette, &highlight))?;
        self.terminal.println(&outcome_message(state, &self.palette))?;
        self.terminal
            .wait_for_back(&self.palette.paint(BACK_TO_MENU, colors::ALERT))
    }
}

pub fn illegal_move_message(error: MoveError, state: &TicTacToeGameState) -> String {
    match error {
        MoveError::OutOfRange => {
            let last = Position::new(state.board.size().cell_count());
            format!("Please enter a valid position (1-{}).", last)
        }
        MoveError::CellOccupied => "That position is already taken!".to_string(),
    }
}

fn outcome_message(state: &TicTacToeGameState, palette: &Palette) -> String {
    match (state.outcome, state.winner()) {
        (GameOutcome::PlayerTwoWins, Some(winner)) if winner.is_computer() => palette.paint(
            "\nComputer wins! Better luck next time!",
            colors::TEXT,
        ),
        (_, Some(winner)) => palette.paint(
            &format!("\nCongratulations {}! You won!", winner.name()),
            colors::WIN,
        ),
        _ => palette.paint("\nThe game is a draw!", colors::TEXT),
    }
}

impl GamePresenter for ConsolePresenter<'_> {
    fn request_human_move(
        &mut self,
        state: &TicTacToeGameState,
        name: &str,
        symbol: Symbol,
    ) -> HumanInput {
        match self.read_human_move(state, name, symbol) {
            Ok(input) => input,
            Err(e) => {
                log!("Failed to read a move from the terminal: {}", e);
                HumanInput::Abort
            }
        }
    }

    fn illegal_move(&mut self, state: &TicTacToeGameState, _position: Position, error: MoveError) {
        self.pending_message = Some(illegal_move_message(error, state));
    }

    fn move_accepted(&mut self, state: &TicTacToeGameState, position: Position, symbol: Symbol) {
        if !state.participant(symbol).is_computer() {
            return;
        }
        if let Err(e) = self.show_computer_move(state, position) {
            log!("Failed to show computer move: {}", e);
        }
    }

    fn game_ended(&mut self, state: &TicTacToeGameState) {
        if state.outcome == GameOutcome::Aborted {
            return;
        }
        if let Err(e) = self.show_result(state) {
            log!("Failed to show game result: {}", e);
        }
    }

    fn play_cue(&mut self, cue: SoundCue) {
        if !self.sound_enabled {
            return;
        }
        let rings = match cue {
            SoundCue::MoveMade => 1,
            SoundCue::GameWon | SoundCue::GameDraw => 2,
        };
        for _ in 0..rings {
            if let Err(e) = self.terminal.bell() {
                log!("Failed to ring the terminal bell: {}", e);
                return;
            }
        }
    }
}
