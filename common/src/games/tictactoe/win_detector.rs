use super::board::Board;
use super::types::{Position, Symbol, WinningLine};

/// Row/column steps for the four line families: horizontal, vertical,
/// down-right diagonal and down-left anti-diagonal.
const DIRECTIONS: [(usize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn has_win(board: &Board, symbol: Symbol) -> bool {
    find_winning_line(board, symbol).is_some()
}

/// First run of `required_run` consecutive `symbol` marks, scanning rows,
/// then columns, then diagonals, then anti-diagonals.
pub fn find_winning_line(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    let side = board.side();
    let run = board.required_run();

    for (d_row, d_col) in DIRECTIONS {
        for row in 0..side {
            for col in 0..side {
                if !line_fits(side, run, row, col, d_row, d_col) {
                    continue;
                }
                if is_run(board, symbol, run, row, col, d_row, d_col) {
                    let size = board.size();
                    let last = run - 1;
                    let end_row = row + d_row * last;
                    let end_col = step(col, d_col, last);
                    return Some(WinningLine::new(
                        symbol,
                        Position::from_row_col(row, col, size),
                        Position::from_row_col(end_row, end_col, size),
                        run,
                    ));
                }
            }
        }
    }

    None
}

fn line_fits(side: usize, run: usize, row: usize, col: usize, d_row: usize, d_col: isize) -> bool {
    if d_row == 1 && row + run > side {
        return false;
    }
    match d_col {
        1 => col + run <= side,
        -1 => col + 1 >= run,
        _ => true,
    }
}

fn is_run(
    board: &Board,
    symbol: Symbol,
    run: usize,
    row: usize,
    col: usize,
    d_row: usize,
    d_col: isize,
) -> bool {
    let mark = symbol.mark();
    (0..run).all(|k| board.cell(row + d_row * k, step(col, d_col, k)) == mark)
}

fn step(col: usize, d_col: isize, k: usize) -> usize {
    col.wrapping_add_signed(d_col * k as isize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::BoardSize;

    fn board_with(size: BoardSize, cells: &[(usize, usize)], symbol: Symbol) -> Board {
        let mut board = Board::new(size);
        for &(row, col) in cells {
            board
                .place_mark(Position::from_row_col(row, col, size), symbol)
                .unwrap();
        }
        board
    }

    /// Every anchor of every family that fits on the board, as cell lists of `len`.
    fn all_lines(size: BoardSize, len: usize) -> Vec<Vec<(usize, usize)>> {
        let side = size.side();
        let mut lines = Vec::new();
        for (d_row, d_col) in DIRECTIONS {
            for row in 0..side {
                for col in 0..side {
                    if line_fits(side, len, row, col, d_row, d_col) {
                        lines.push(
                            (0..len)
                                .map(|k| (row + d_row * k, step(col, d_col, k)))
                                .collect(),
                        );
                    }
                }
            }
        }
        lines
    }

    #[test]
    fn test_empty_board_has_no_win() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            assert!(!has_win(&board, Symbol::X));
            assert!(!has_win(&board, Symbol::O));
        }
    }

    #[test]
    fn test_every_full_run_wins_on_every_size() {
        for size in BoardSize::ALL {
            let lines = all_lines(size, size.required_run());
            assert!(!lines.is_empty());
            for line in lines {
                let board = board_with(size, &line, Symbol::O);
                assert!(has_win(&board, Symbol::O), "{:?} {:?}", size, line);
                assert!(!has_win(&board, Symbol::X), "{:?} {:?}", size, line);
            }
        }
    }

    #[test]
    fn test_run_one_short_never_wins() {
        for size in BoardSize::ALL {
            for line in all_lines(size, size.required_run() - 1) {
                let board = board_with(size, &line, Symbol::X);
                assert!(!has_win(&board, Symbol::X), "{:?} {:?}", size, line);
            }
        }
    }

    #[test]
    fn test_line_counts_per_size() {
        // 3x3: 3 rows + 3 cols + 1 + 1 diagonals
        assert_eq!(all_lines(BoardSize::Small, 3).len(), 8);
        // 5x5 with run 4: 10 + 10 + 4 + 4
        assert_eq!(all_lines(BoardSize::Medium, 4).len(), 28);
        // 7x7 with run 5: 21 + 21 + 9 + 9
        assert_eq!(all_lines(BoardSize::Large, 5).len(), 60);
    }

    #[test]
    fn test_small_board_lines() {
        let top_row = Board::from_rows(&["XXX", "...", "..."]);
        assert!(has_win(&top_row, Symbol::X));

        let middle_column = Board::from_rows(&[".O.", ".O.", ".O."]);
        assert!(has_win(&middle_column, Symbol::O));

        let diagonal = Board::from_rows(&["X..", ".X.", "..X"]);
        assert!(has_win(&diagonal, Symbol::X));

        let anti_diagonal = Board::from_rows(&["..O", ".O.", "O.."]);
        assert!(has_win(&anti_diagonal, Symbol::O));
    }

    #[test]
    fn test_mixed_lines_do_not_win() {
        let board = Board::from_rows(&["XOX", "OXO", "OXO"]);
        assert!(!has_win(&board, Symbol::X));
        assert!(!has_win(&board, Symbol::O));

        let mixed_diagonal = Board::from_rows(&["X..", ".O.", "..X"]);
        assert!(!has_win(&mixed_diagonal, Symbol::X));
        assert!(!has_win(&mixed_diagonal, Symbol::O));
    }

    #[test]
    fn test_medium_board_needs_four() {
        let three = Board::from_rows(&["XXX..", ".....", ".....", ".....", "....."]);
        assert!(!has_win(&three, Symbol::X));

        let four = Board::from_rows(&[".XXXX", ".....", ".....", ".....", "....."]);
        assert!(has_win(&four, Symbol::X));

        let broken = Board::from_rows(&["XX.XX", ".....", ".....", ".....", "....."]);
        assert!(!has_win(&broken, Symbol::X));
    }

    #[test]
    fn test_large_board_needs_five() {
        let four = Board::from_rows(&[
            "O......", ".O.....", "..O....", "...O...", ".......", ".......", ".......",
        ]);
        assert!(!has_win(&four, Symbol::O));

        let five = Board::from_rows(&[
            ".......", ".......", "......O", ".....O.", "....O..", "...O...", "..O....",
        ]);
        assert!(has_win(&five, Symbol::O));
    }

    #[test]
    fn test_winning_line_endpoints() {
        let board = Board::from_rows(&["..O", ".O.", "O.."]);
        let line = find_winning_line(&board, Symbol::O).unwrap();
        assert_eq!(line.start, Position::new(3));
        assert_eq!(line.end, Position::new(7));
        assert_eq!(line.cells, 3);
        assert_eq!(line.symbol, Symbol::O);

        let column = Board::from_rows(&[".....", "..X..", "..X..", "..X..", "..X.."]);
        let line = find_winning_line(&column, Symbol::X).unwrap();
        assert_eq!(line.start, Position::new(8));
        assert_eq!(line.end, Position::new(23));
        assert_eq!(line.positions(BoardSize::Medium).len(), 4);
    }

    #[test]
    fn test_longer_run_than_required_still_wins() {
        let board = Board::from_rows(&["XXXXX", ".....", ".....", ".....", "....."]);
        assert!(has_win(&board, Symbol::X));
    }
}
