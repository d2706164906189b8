use std::io;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    GameSettings, Participant, ScoreTally, TicTacToeSession, TicTacToeSessionSettings,
};
use common::log;

use crate::colors::{self, Palette};
use crate::config::Config;
use crate::input::{decode_menu_choice, is_quit_key};
use crate::presenter::{BACK_TO_MENU, ConsolePresenter};
use crate::terminal::Terminal;
use crate::view::{boxed, boxed_menu};

const MAX_NAME_LENGTH: usize = 50;

const MAIN_MENU: [&str; 7] = [
    "Player vs Player",
    "Player vs Computer",
    "Game Rules",
    "High Scores",
    "Settings",
    "Credits",
    "Exit",
];

const SETTINGS_MENU: [&str; 5] = [
    "Computer Difficulty",
    "Sound Effects",
    "Color Display",
    "Grid Size (3x3, 5x5, 7x7)",
    "Back to Main Menu",
];

const RULES: [&str; 7] = [
    "1. Play on a grid (3x3, 5x5, or 7x7)",
    "2. Player 1 is X, Player 2 is O",
    "3. Take turns marking spaces",
    "4. First with a full row/column/diagonal wins",
    "5. Full board with no winner = draw",
    "6. Press number/letter keys to make moves",
    "7. 3x3:3 in a row,5x5:4 in a row,7x7:5 in a row",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayerVsPlayer,
    PlayerVsComputer,
    Rules,
    HighScores,
    Settings,
    Credits,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: u8) -> Option<MenuChoice> {
        match number {
            1 => Some(MenuChoice::PlayerVsPlayer),
            2 => Some(MenuChoice::PlayerVsComputer),
            3 => Some(MenuChoice::Rules),
            4 => Some(MenuChoice::HighScores),
            5 => Some(MenuChoice::Settings),
            6 => Some(MenuChoice::Credits),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Trimmed and shortened name, or `fallback` when nothing is left.
pub fn normalize_name(input: &str, fallback: &str) -> String {
    let name: String = input.trim().chars().take(MAX_NAME_LENGTH).collect();
    let name = name.trim_end();
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Applies a settings screen choice. Returns `false` when the screen should close.
pub fn apply_settings_choice(settings: &mut GameSettings, choice: u8) -> bool {
    match choice {
        1 => settings.cycle_difficulty(),
        2 => settings.toggle_sound(),
        3 => settings.toggle_color(),
        4 => settings.cycle_board_size(),
        _ => return false,
    }
    true
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

pub fn settings_summary(settings: &GameSettings) -> Vec<String> {
    vec![
        format!("1. Difficulty: {}", settings.difficulty),
        format!("2. Sounds: {}", on_off(settings.sound_enabled)),
        format!("3. Colors: {}", on_off(settings.color_enabled)),
        format!("4. Grid Size: {}", settings.board_size),
        "5. Back".to_string(),
    ]
}

pub fn high_score_rows(scores: &ScoreTally) -> Vec<String> {
    vec![
        format!("Player 1: {}", scores.player_one_name),
        format!("Wins: {}", scores.player_one_wins),
        format!("Player 2: {}", scores.player_two_name),
        format!("Wins: {}", scores.player_two_wins),
        format!("Draws: {}", scores.draws),
        format!("Last Grid Size: {}", scores.last_board_size),
    ]
}

pub struct App {
    terminal: Terminal,
    settings: GameSettings,
    scores: ScoreTally,
    computer_move_delay: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            terminal: Terminal::new(),
            settings: config.settings,
            scores: ScoreTally::new(),
            computer_move_delay: config.computer_move_delay(),
        }
    }

    fn palette(&self) -> Palette {
        Palette::new(self.settings.color_enabled)
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let choice = self.main_menu()?;
            log!("Main menu choice: {:?}", choice);
            match choice {
                MenuChoice::PlayerVsPlayer => self.play_pvp()?,
                MenuChoice::PlayerVsComputer => self.play_pvc()?,
                MenuChoice::Rules => self.show_rules()?,
                MenuChoice::HighScores => self.show_high_scores()?,
                MenuChoice::Settings => self.show_settings()?,
                MenuChoice::Credits => self.show_credits()?,
                MenuChoice::Exit => {
                    let farewell = self
                        .palette()
                        .paint("\nThanks for playing! Goodbye!", colors::TEXT);
                    return self.terminal.println(&farewell);
                }
            }
        }
    }

    fn main_menu(&mut self) -> io::Result<MenuChoice> {
        let menu = boxed_menu(" TIC-TAC-TOE ", &MAIN_MENU, &self.palette());
        let prompt = self.palette().paint("\nSelect option : ", colors::TEXT);
        self.terminal.clear()?;
        self.terminal.print(&menu)?;
        self.terminal.print(&prompt)?;

        loop {
            let key = self.terminal.read_key()?;
            if is_quit_key(&key) {
                return Ok(MenuChoice::Exit);
            }
            if let Some(choice) =
                decode_menu_choice(&key, MAIN_MENU.len() as u8).and_then(MenuChoice::from_number)
            {
                self.terminal.println("")?;
                return Ok(choice);
            }
        }
    }

    fn ask_name(&mut self, prompt: &str, fallback: &str) -> io::Result<String> {
        let prompt = self.palette().paint(prompt, colors::TEXT);
        self.terminal.print(&prompt)?;
        let line = self.terminal.read_line()?;
        Ok(normalize_name(&line, fallback))
    }

    fn play_pvp(&mut self) -> io::Result<()> {
        self.terminal.clear()?;
        let menu = boxed_menu(
            " Player Names ",
            &["Enter Player 1 name", "Enter Player 2 name"],
            &self.palette(),
        );
        self.terminal.print(&menu)?;
        let player_one = self.ask_name("\n1. Enter Player 1 name: ", "Player 1")?;
        let player_two = self.ask_name("2. Enter Player 2 name: ", "Player 2")?;
        self.play(Participant::human(player_one), Participant::human(player_two));
        Ok(())
    }

    fn play_pvc(&mut self) -> io::Result<()> {
        self.terminal.clear()?;
        let menu = boxed_menu(" Player Name ", &["Enter your name"], &self.palette());
        self.terminal.print(&menu)?;
        let player_one = self.ask_name("\n1. Enter your name: ", "Player 1")?;
        self.play(Participant::human(player_one), Participant::Computer);
        Ok(())
    }

    fn play(&mut self, player_one: Participant, player_two: Participant) {
        let mut rng = SessionRng::from_random();
        log!("New session rng seed: {}", rng.seed());

        let palette = self.palette();
        let settings = TicTacToeSessionSettings::from(&self.settings);
        let mut presenter = ConsolePresenter::new(
            &mut self.terminal,
            palette,
            self.settings.sound_enabled,
            self.computer_move_delay,
        );
        TicTacToeSession::run(
            player_one,
            player_two,
            settings,
            &mut self.scores,
            &mut rng,
            &mut presenter,
        );
    }

    fn show_rules(&mut self) -> io::Result<()> {
        let rows: Vec<String> = RULES.iter().map(|rule| rule.to_string()).collect();
        let text = boxed(" Game Rules ", &rows, &self.palette(), colors::FRAME);
        self.show_page(&text)
    }

    fn show_high_scores(&mut self) -> io::Result<()> {
        let rows = high_score_rows(&self.scores);
        let text = boxed(" High Scores ", &rows, &self.palette(), colors::MENU);
        self.show_page(&text)
    }

    fn show_credits(&mut self) -> io::Result<()> {
        let rows = vec![
            String::new(),
            "TIC-TAC-TOE".to_string(),
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            String::new(),
        ];
        let text = boxed(" Credits ", &rows, &self.palette(), colors::FRAME);
        self.show_page(&text)
    }

    fn show_page(&mut self, text: &str) -> io::Result<()> {
        let back = self.palette().paint(BACK_TO_MENU, colors::ALERT);
        self.terminal.clear()?;
        self.terminal.print(text)?;
        self.terminal.wait_for_back(&back)
    }

    fn show_settings(&mut self) -> io::Result<()> {
        loop {
            let palette = self.palette();
            let menu = boxed_menu(" Game Settings ", &SETTINGS_MENU, &palette);
            let mut current = palette.paint("\nCurrent Settings:", colors::TEXT);
            for line in settings_summary(&self.settings) {
                current.push('\n');
                current.push_str(&palette.paint(&line, colors::TEXT));
            }

            self.terminal.clear()?;
            self.terminal.print(&menu)?;
            self.terminal.println(&current)?;
            self.terminal
                .print(&palette.paint("\nSelect option : ", colors::TEXT))?;

            let choice = loop {
                let key = self.terminal.read_key()?;
                if is_quit_key(&key) {
                    break SETTINGS_MENU.len() as u8;
                }
                if let Some(choice) = decode_menu_choice(&key, SETTINGS_MENU.len() as u8) {
                    break choice;
                }
            };

            if !apply_settings_choice(&mut self.settings, choice) {
                log!("Settings updated: {:?}", self.settings);
                return Ok(());
            }
        }
    }
}
