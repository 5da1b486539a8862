use super::player::PlayerId;

pub const ROWS: usize = 7;
pub const COLS: usize = 7;

/// Length of a winning run.
pub const RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
}

/// A 7x7 grid. Row 0 is the top, row `ROWS - 1` is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rows from top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// A column that does not exist has no capacity either.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece for `player` into `col`, returns the row where it landed.
    /// The board is left untouched when the column has no empty cell.
    pub fn apply_move(&mut self, player: PlayerId, col: usize) -> Result<usize, MoveError> {
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Taken(player);
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// True if `player` owns any run of four in any direction.
    pub fn has_winner(&self, player: PlayerId) -> bool {
        let cell = Cell::Taken(player);
        self.check_horizontal(cell)
            || self.check_vertical(cell)
            || self.check_diagonal_up(cell)
            || self.check_diagonal_down(cell)
    }

    /// Every window of `RUN` cells starting at (row, col) and stepping by
    /// (dr, dc) must already be known to stay on the grid.
    fn run_at(&self, cell: Cell, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        (0..RUN as isize).all(|k| {
            let r = (row as isize + dr * k) as usize;
            let c = (col as isize + dc * k) as usize;
            self.cells[r][c] == cell
        })
    }

    /// Fixed row, consecutive columns.
    fn check_horizontal(&self, cell: Cell) -> bool {
        (0..ROWS).any(|row| (0..=COLS - RUN).any(|col| self.run_at(cell, row, col, 0, 1)))
    }

    /// Fixed column, consecutive rows.
    fn check_vertical(&self, cell: Cell) -> bool {
        (0..=ROWS - RUN).any(|row| (0..COLS).any(|col| self.run_at(cell, row, col, 1, 0)))
    }

    /// Bottom-left to top-right, /
    fn check_diagonal_up(&self, cell: Cell) -> bool {
        (RUN - 1..ROWS).any(|row| (0..=COLS - RUN).any(|col| self.run_at(cell, row, col, -1, 1)))
    }

    /// Bottom-right to top-left, \
    fn check_diagonal_down(&self, cell: Cell) -> bool {
        (RUN - 1..ROWS).any(|row| (RUN - 1..COLS).any(|col| self.run_at(cell, row, col, -1, -1)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: PlayerId = PlayerId::FIRST;
    const TWO: PlayerId = PlayerId::SECOND;

    /// Fills the grid with two-wide stripes that shift every row; no run is
    /// longer than two in any direction.
    fn striped_mark(row: usize, col: usize) -> PlayerId {
        if (col / 2 + row) % 2 == 0 {
            ONE
        } else {
            TWO
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.open_columns(), (0..COLS).collect::<Vec<_>>());
    }

    #[test]
    fn test_apply_move_lands_lowest() {
        let mut board = Board::new();

        let row = board.apply_move(ONE, 3).unwrap();
        assert_eq!(row, ROWS - 1);
        assert_eq!(board.get(ROWS - 1, 3), Cell::Taken(ONE));

        let row = board.apply_move(TWO, 3).unwrap();
        assert_eq!(row, ROWS - 2);
        assert_eq!(board.get(ROWS - 2, 3), Cell::Taken(TWO));
    }

    #[test]
    fn test_apply_move_leaves_other_columns() {
        let mut board = Board::new();
        board.apply_move(ONE, 0).unwrap();
        let before = board;

        board.apply_move(TWO, 4).unwrap();
        for row in 0..ROWS {
            for col in (0..COLS).filter(|&c| c != 4) {
                assert_eq!(board.get(row, col), before.get(row, col));
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.apply_move(ONE, 0).unwrap();
        }

        let before = board;
        assert!(board.is_column_full(0));
        assert_eq!(board.apply_move(TWO, 0), Err(MoveError::ColumnFull));
        assert_eq!(board, before);
        assert!(!board.open_columns().contains(&0));
    }

    #[test]
    fn test_nonexistent_column_reports_full() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(ONE, COLS), Err(MoveError::ColumnFull));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                assert!(!board.is_full());
                board.apply_move(striped_mark(row, col), col).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_striped_board_has_no_winner() {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                board.apply_move(striped_mark(row, col), col).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.has_winner(ONE));
        assert!(!board.has_winner(TWO));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.apply_move(ONE, col).unwrap();
        }
        assert!(board.has_winner(ONE));
        assert!(!board.has_winner(TWO));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::new();
        for col in COLS - 4..COLS {
            board.apply_move(TWO, col).unwrap();
        }
        assert!(board.has_winner(TWO));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.apply_move(TWO, 3).unwrap();
        }
        assert!(board.has_winner(TWO));
        assert!(!board.has_winner(ONE));
    }

    #[test]
    fn test_vertical_win_at_top() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.apply_move(ONE, 6).unwrap();
        }
        for _ in 0..4 {
            board.apply_move(TWO, 6).unwrap();
        }
        assert!(board.has_winner(TWO));
        assert!(!board.has_winner(ONE));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.apply_move(ONE, 0).unwrap();

        board.apply_move(TWO, 1).unwrap();
        board.apply_move(ONE, 1).unwrap();

        board.apply_move(TWO, 2).unwrap();
        board.apply_move(TWO, 2).unwrap();
        board.apply_move(ONE, 2).unwrap();

        board.apply_move(TWO, 3).unwrap();
        board.apply_move(TWO, 3).unwrap();
        board.apply_move(TWO, 3).unwrap();
        assert!(!board.has_winner(ONE));
        board.apply_move(ONE, 3).unwrap();

        assert!(board.has_winner(ONE));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.apply_move(ONE, 6).unwrap();

        board.apply_move(TWO, 5).unwrap();
        board.apply_move(ONE, 5).unwrap();

        board.apply_move(TWO, 4).unwrap();
        board.apply_move(TWO, 4).unwrap();
        board.apply_move(ONE, 4).unwrap();

        board.apply_move(TWO, 3).unwrap();
        board.apply_move(TWO, 3).unwrap();
        board.apply_move(TWO, 3).unwrap();
        assert!(!board.has_winner(ONE));
        board.apply_move(ONE, 3).unwrap();

        assert!(board.has_winner(ONE));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.apply_move(ONE, col).unwrap();
        }
        for _ in 0..3 {
            board.apply_move(ONE, 5).unwrap();
        }
        assert!(!board.has_winner(ONE));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = Board::new();
        board.apply_move(ONE, 0).unwrap();
        board.apply_move(ONE, 1).unwrap();
        board.apply_move(TWO, 2).unwrap();
        board.apply_move(ONE, 3).unwrap();
        board.apply_move(ONE, 4).unwrap();
        assert!(!board.has_winner(ONE));
    }
}
