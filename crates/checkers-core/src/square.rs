use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A position on the 8x8 board, addressed by row and column.
///
/// Row 0 is the top row as printed (Black's back rank) and row 7 is White's
/// back rank:
///
/// ```text
///    0  1  2  3  4  5  6  7
/// 0  .  b  .  b  .  b  .  b
/// 1  b  .  b  .  b  .  b  .
/// ...
/// 7  w  .  w  .  w  .  w  .
/// ```
///
/// A `Square` always lies on the board; coordinates read from the user are
/// validated through [`Square::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from signed coordinates.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if both coordinates are in `[0, 8)`, `None` otherwise.
    pub fn new(row: i32, col: i32) -> Option<Square> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a square from coordinates known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if either `row` or `col` is >= 8.
    pub fn from_row_col(row: usize, col: usize) -> Square {
        assert!(row < BOARD_SIZE, "Invalid row: {row}");
        assert!(col < BOARD_SIZE, "Invalid col: {col}");
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Returns `true` for the squares pieces may stand on, where
    /// `row + col` is odd.
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns `true` if `other` is exactly one diagonal step away.
    pub fn is_diagonal_neighbor(self, other: Square) -> bool {
        self.row.abs_diff(other.row) == 1 && self.col.abs_diff(other.col) == 1
    }

    /// Returns an iterator over all 64 squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(|i| Square::from_row_col(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
