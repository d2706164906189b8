use common::games::tictactoe::Symbol;
use crossterm::style::{Color, Stylize};

pub const PLAYER_ONE: Color = Color::Yellow;
pub const PLAYER_TWO: Color = Color::Red;
pub const BOARD: Color = Color::Cyan;
pub const TEXT: Color = Color::White;
pub const MENU: Color = Color::Magenta;
pub const WIN: Color = Color::Green;
pub const FRAME: Color = Color::Blue;
pub const ALERT: Color = Color::Red;

/// Wraps text in color codes, or leaves it alone when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn symbol_color(symbol: Symbol) -> Color {
        match symbol {
            Symbol::X => PLAYER_ONE,
            Symbol::O => PLAYER_TWO,
        }
    }

    pub fn symbol(&self, symbol: Symbol) -> String {
        self.paint(&symbol.to_string(), Self::symbol_color(symbol))
    }
}
