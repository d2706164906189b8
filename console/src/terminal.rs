use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use crate::input::is_back_key;

pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.stdout, "{}", text)?;
        self.stdout.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text)?;
        self.stdout.flush()
    }

    pub fn bell(&mut self) -> io::Result<()> {
        self.print("\u{7}")
    }

    /// Blocks for one key press. Raw mode is on only while waiting.
    pub fn read_key(&mut self) -> io::Result<KeyEvent> {
        terminal::enable_raw_mode()?;
        let result = loop {
            match event::read() {
                // Key release events also arrive on some platforms.
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        terminal::disable_raw_mode()?;
        result
    }

    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }

    pub fn wait_for_back(&mut self, message: &str) -> io::Result<()> {
        self.print(message)?;
        loop {
            if is_back_key(&self.read_key()?) {
                return self.println("");
            }
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
