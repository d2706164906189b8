use common::games::tictactoe::{Board, Mark, Position};

use crate::colors::{self, Palette};

/// Board as text. Empty cells show the key that selects them.
pub fn render_board(board: &Board, palette: &Palette, highlight: &[Position]) -> String {
    let side = board.side();
    let size = board.size();
    let mut out = String::new();

    out.push_str(&palette.paint(&format!(" {}", "____".repeat(side)), colors::BOARD));
    out.push('\n');

    for row in 0..side {
        for col in 0..side {
            let position = Position::from_row_col(row, col, size);
            let cell = match board.cell(row, col).symbol() {
                Some(symbol) if highlight.contains(&position) => {
                    palette.paint(&symbol.to_string(), colors::WIN)
                }
                Some(symbol) => palette.symbol(symbol),
                None => palette.paint(&cell_label(board, position), colors::BOARD),
            };
            out.push_str(&palette.paint("| ", colors::BOARD));
            out.push_str(&cell);
            out.push(' ');
        }
        out.push_str(&palette.paint("|", colors::BOARD));
        out.push('\n');
        out.push_str(&palette.paint(&format!(" {}", "----".repeat(side)), colors::BOARD));
        out.push('\n');
    }

    out
}

fn cell_label(board: &Board, position: Position) -> String {
    match (board.get(position), position.key()) {
        (Some(Mark::Empty), Some(key)) => key.to_string(),
        _ => " ".to_string(),
    }
}

/// Framed block with a title row followed by `rows`.
pub fn boxed(title: &str, rows: &[String], palette: &Palette, frame: crossterm::style::Color) -> String {
    let inner = rows
        .iter()
        .map(|row| row.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
        + 4;

    let border = palette.paint(&format!(" {} ", "+".repeat(inner)), frame);
    let bar = palette.paint("|", frame);
    let mut out = String::new();

    out.push_str(&border);
    out.push('\n');
    out.push_str(&bar);
    out.push_str(&palette.paint(&pad(&format!("  {}", title), inner), colors::MENU));
    out.push_str(&bar);
    out.push('\n');
    for row in rows {
        out.push_str(&bar);
        out.push_str(&palette.paint(&pad(&format!(" {}", row), inner), colors::BOARD));
        out.push_str(&bar);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');

    out
}

/// Numbered options in a frame, as the menus show them.
pub fn boxed_menu(title: &str, options: &[&str], palette: &Palette) -> String {
    let rows: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}", i + 1, option))
        .collect();
    boxed(title, &rows, palette, colors::FRAME)
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
