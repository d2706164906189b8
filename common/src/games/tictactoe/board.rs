use super::types::{BoardSize, Mark, Position, Symbol};
use super::validate::{MoveError, validate_move};

/// Square grid whose side is fixed when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        let side = size.side();
        Self {
            size,
            cells: vec![vec![Mark::Empty; side]; side],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn side(&self) -> usize {
        self.size.side()
    }

    pub fn required_run(&self) -> usize {
        self.size.required_run()
    }

    pub fn cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        position
            .to_row_col(self.size)
            .map(|(row, col)| self.cells[row][col])
    }

    pub fn place_mark(&mut self, position: Position, symbol: Symbol) -> Result<(), MoveError> {
        validate_move(self, position)?;
        let (row, col) = position.to_row_col(self.size).ok_or(MoveError::OutOfRange)?;
        self.cells[row][col] = symbol.mark();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty positions in ascending order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::from_row_col(row, col, self.size));
                }
            }
        }
        moves
    }

    /// Copy of the board with `symbol` placed at an empty `position`.
    pub(crate) fn with_mark(&self, position: Position, symbol: Symbol) -> Option<Board> {
        let mut board = self.clone();
        board.place_mark(position, symbol).ok()?;
        Some(board)
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let size = match rows.len() {
            3 => BoardSize::Small,
            5 => BoardSize::Medium,
            7 => BoardSize::Large,
            other => panic!("unsupported board side {}", other),
        };
        let cells = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Mark::X,
                        'O' => Mark::O,
                        _ => Mark::Empty,
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        assert!(cells.iter().all(|row| row.len() == size.side()));
        Self { size, cells }
    }
}
