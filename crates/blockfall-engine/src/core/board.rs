use super::piece::{Piece, ShapeKind};

/// Playfield width in columns.
pub const BOARD_WIDTH: usize = 10;
/// Playfield height in rows.
pub const BOARD_HEIGHT: usize = 22;

type Row = [ShapeKind; BOARD_WIDTH];

const EMPTY_ROW: Row = [ShapeKind::Empty; BOARD_WIDTH];

fn is_filled(row: &Row) -> bool {
    row.iter().all(|cell| !cell.is_empty())
}

/// The well: a fixed grid of settled cells.
///
/// Rows are stored bottom-up. Row 0 is the floor of the well and gravity
/// decreases the row index; renderers that draw top-down flip the rows at
/// the display boundary.
///
/// A piece cell `(dx, dy)` placed at pivot `(x, y)` occupies column
/// `x + dx` and row `y - dy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Board {
    /// A board with every cell vacant.
    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; BOARD_HEIGHT],
    };

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<ShapeKind> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some(self.rows[y][x])
    }

    /// Writes a single cell. Out-of-bounds coordinates are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, kind: ShapeKind) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < BOARD_WIDTH && y < BOARD_HEIGHT {
            self.rows[y][x] = kind;
        }
    }

    /// Checks whether all four cells of `piece` at pivot `(x, y)` land on
    /// vacant in-bounds cells.
    #[must_use]
    pub fn fits(&self, piece: Piece, x: i32, y: i32) -> bool {
        piece
            .cells()
            .into_iter()
            .all(|(dx, dy)| self.cell(x + dx, y - dy).is_some_and(ShapeKind::is_empty))
    }

    /// Writes the piece's four cells into the grid.
    ///
    /// Callers validate the pose with [`fits`](Self::fits) first.
    pub fn fill_piece(&mut self, piece: Piece, x: i32, y: i32) {
        for (dx, dy) in piece.cells() {
            self.set_cell(x + dx, y - dy, piece.kind());
        }
    }

    /// Clears filled rows and returns how many were cleared.
    ///
    /// Surviving rows keep their relative order and slide toward the
    /// bottom by the number of filled rows beneath them; the topmost
    /// `count` rows end up vacant.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        for y in 0..BOARD_HEIGHT {
            if is_filled(&self.rows[y]) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y - count] = self.rows[y];
            }
        }
        self.rows[BOARD_HEIGHT - count..].fill(EMPTY_ROW);
        count
    }

    /// Iterates rows bottom-up (row 0 first).
    #[must_use]
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[ShapeKind; BOARD_WIDTH]> {
        self.rows.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, kind: ShapeKind) {
        for x in 0..10 {
            board.set_cell(x, y, kind);
        }
    }

    #[test]
    fn test_empty_board_cells() {
        let board = Board::EMPTY;
        for y in 0..22 {
            for x in 0..10 {
                assert_eq!(board.cell(x, y), Some(ShapeKind::Empty));
            }
        }
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let board = Board::EMPTY;
        assert_eq!(board.cell(-1, 0), None);
        assert_eq!(board.cell(10, 0), None);
        assert_eq!(board.cell(0, -1), None);
        assert_eq!(board.cell(0, 22), None);
    }

    #[test]
    fn test_set_cell_ignores_out_of_bounds() {
        let mut board = Board::EMPTY;
        board.set_cell(-1, 5, ShapeKind::I);
        board.set_cell(10, 5, ShapeKind::I);
        board.set_cell(5, 22, ShapeKind::I);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_fits_respects_bounds() {
        let board = Board::EMPTY;
        let o = Piece::new(ShapeKind::O);

        // O occupies columns x..=x+1 and rows y-1..=y
        assert!(board.fits(o, 0, 1));
        assert!(!board.fits(o, -1, 1));
        assert!(!board.fits(o, 9, 1));
        assert!(!board.fits(o, 0, 0));
        assert!(board.fits(o, 8, 21));
        assert!(!board.fits(o, 8, 22));
    }

    #[test]
    fn test_fits_respects_occupied_cells() {
        let mut board = Board::EMPTY;
        let o = Piece::new(ShapeKind::O);
        assert!(board.fits(o, 4, 1));

        board.set_cell(5, 0, ShapeKind::T);
        assert!(!board.fits(o, 4, 1));
        assert!(board.fits(o, 6, 1));
    }

    #[test]
    fn test_fill_piece_writes_kind() {
        let mut board = Board::EMPTY;
        board.fill_piece(Piece::new(ShapeKind::O), 4, 1);

        assert_eq!(board.cell(4, 1), Some(ShapeKind::O));
        assert_eq!(board.cell(5, 1), Some(ShapeKind::O));
        assert_eq!(board.cell(4, 0), Some(ShapeKind::O));
        assert_eq!(board.cell(5, 0), Some(ShapeKind::O));
        assert_eq!(board.cell(6, 0), Some(ShapeKind::Empty));
    }

    #[test]
    fn test_clear_lines_nothing_to_clear() {
        let mut board = Board::EMPTY;
        // Nine of ten cells is not a full row
        for x in 0..9 {
            board.set_cell(x, 0, ShapeKind::I);
        }

        let snapshot = board.clone();
        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, snapshot);

        // Idempotent on repeat
        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_clear_lines_single_row_shifts_down() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, ShapeKind::I);
        board.set_cell(3, 1, ShapeKind::T);
        board.set_cell(7, 2, ShapeKind::S);

        assert_eq!(board.clear_lines(), 1);

        assert_eq!(board.cell(3, 0), Some(ShapeKind::T));
        assert_eq!(board.cell(7, 1), Some(ShapeKind::S));
        assert_eq!(board.cell(3, 1), Some(ShapeKind::Empty));
        for x in 0..10 {
            assert_eq!(board.cell(x, 21), Some(ShapeKind::Empty));
        }
    }

    #[test]
    fn test_clear_lines_two_adjacent_rows() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, ShapeKind::I);
        fill_row(&mut board, 1, ShapeKind::J);
        board.set_cell(5, 2, ShapeKind::T);

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(board.cell(5, 0), Some(ShapeKind::T));
        assert_eq!(board.cell(5, 1), Some(ShapeKind::Empty));
        assert_eq!(board.cell(5, 2), Some(ShapeKind::Empty));
    }

    #[test]
    fn test_clear_lines_interleaved_keeps_survivor_order() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, ShapeKind::I);
        board.set_cell(2, 1, ShapeKind::S);
        fill_row(&mut board, 2, ShapeKind::I);
        board.set_cell(4, 3, ShapeKind::Z);

        assert_eq!(board.clear_lines(), 2);

        // Survivors compact to the bottom in their original order
        assert_eq!(board.cell(2, 0), Some(ShapeKind::S));
        assert_eq!(board.cell(4, 1), Some(ShapeKind::Z));
        assert_eq!(board.cell(2, 1), Some(ShapeKind::Empty));
        assert_eq!(board.cell(4, 3), Some(ShapeKind::Empty));
    }

    #[test]
    fn test_clear_lines_four_stacked_rows() {
        let mut board = Board::EMPTY;
        for y in 0..4 {
            fill_row(&mut board, y, ShapeKind::L);
        }
        board.set_cell(0, 4, ShapeKind::T);
        board.set_cell(9, 5, ShapeKind::J);

        assert_eq!(board.clear_lines(), 4);
        assert_eq!(board.cell(0, 0), Some(ShapeKind::T));
        assert_eq!(board.cell(9, 1), Some(ShapeKind::J));
        for y in 2..22 {
            for x in 0..10 {
                assert_eq!(board.cell(x, y), Some(ShapeKind::Empty));
            }
        }
    }

    #[test]
    fn test_clear_lines_topmost_row() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 21, ShapeKind::Z);

        assert_eq!(board.clear_lines(), 1);
        for x in 0..10 {
            assert_eq!(board.cell(x, 21), Some(ShapeKind::Empty));
        }
    }

    #[test]
    fn test_clear_lines_all_rows_filled() {
        let mut board = Board::EMPTY;
        for y in 0..22 {
            fill_row(&mut board, y, ShapeKind::O);
        }

        assert_eq!(board.clear_lines(), 22);
        assert_eq!(board, Board::EMPTY);
    }
}
