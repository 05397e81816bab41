//! 8x8 checkers board stored as a grid of cells.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};
use crate::theme::Theme;

/// Number of rows each side fills at setup.
const SETUP_ROWS: usize = 3;

/// A validated single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// The piece as it stands on the destination square.
    pub piece: Piece,
    /// `true` if the move turned a man into a king.
    pub promoted: bool,
}

/// The checkers board.
///
/// Pieces may only stand on dark squares (`row + col` odd), one per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    /// Creates a board in the starting position.
    fn default() -> Self {
        let mut board = Board::empty();
        board.setup();
        board
    }
}

impl Board {
    /// Creates a new `Board` with twelve men per side.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Board {
        Board {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| Cell::new(Square::from_row_col(row, col)))
            }),
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// Whitespace is ignored. The remaining 64 characters describe the squares
    /// in row-major order:
    /// - `'w'` / `'W'` for a white man / king
    /// - `'b'` / `'B'` for a black man / king
    /// - `'.'` or `'-'` for an empty square
    ///
    /// # Errors
    ///
    /// Returns an error string for a wrong length, an unknown character, or a
    /// piece on a light square.
    pub fn from_string(board_string: &str) -> Result<Board, String> {
        let chars: Vec<char> = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(format!(
                "Expected {} squares, got {}",
                BOARD_SIZE * BOARD_SIZE,
                chars.len()
            ));
        }

        let mut board = Board::empty();
        for (sq, c) in Square::iter().zip(chars) {
            let piece = match c {
                'w' => Piece::man(Color::White),
                'W' => Piece::king(Color::White),
                'b' => Piece::man(Color::Black),
                'B' => Piece::king(Color::Black),
                '.' | '-' => continue,
                other => return Err(format!("Unknown square character '{other}' at {sq}")),
            };
            board.place(sq, piece)?;
        }
        Ok(board)
    }

    /// Places men on the dark squares of the three back rows of each side and
    /// clears every other square.
    pub fn setup(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.take();
            let sq = cell.square();
            if !sq.is_dark() {
                continue;
            }
            if sq.row() < SETUP_ROWS {
                cell.set(Piece::man(Color::Black));
            } else if sq.row() >= BOARD_SIZE - SETUP_ROWS {
                cell.set(Piece::man(Color::White));
            }
        }
    }

    /// Puts a piece on a dark square, replacing any previous occupant.
    ///
    /// # Errors
    ///
    /// Returns an error string if `sq` is a light square.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<Option<Piece>, String> {
        if !sq.is_dark() {
            return Err(format!(
                "Pieces may only stand on dark squares, {sq} is light"
            ));
        }
        Ok(self.cell_mut(sq).set(piece))
    }

    /// Removes and returns the piece on `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).take()
    }

    #[inline]
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.row()][sq.col()]
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).piece()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells()
            .filter_map(|cell| cell.piece().map(|piece| (cell.square(), piece)))
    }

    /// Counts the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color() == color).count()
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces().any(|(_, p)| p.color() == color)
    }

    /// Checks a move and reports the first rule it breaks.
    ///
    /// The checks run in this order: all four coordinates on the board, a
    /// piece on the source, an empty destination, then a single diagonal step
    /// in any direction. Piece color and rank are not considered.
    ///
    /// # Returns
    ///
    /// The validated `Move` on success.
    pub fn check_move(
        &self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<Move, MoveError> {
        let from = Square::new(from_row, from_col).ok_or(MoveError::OutOfBounds {
            row: from_row,
            col: from_col,
        })?;
        let to = Square::new(to_row, to_col).ok_or(MoveError::OutOfBounds {
            row: to_row,
            col: to_col,
        })?;
        let mv = Move { from, to };
        self.check(mv)?;
        Ok(mv)
    }

    fn check(&self, mv: Move) -> Result<(), MoveError> {
        if self.cell(mv.from).is_empty() {
            return Err(MoveError::EmptySource(mv.from));
        }
        if !self.cell(mv.to).is_empty() {
            return Err(MoveError::OccupiedDestination(mv.to));
        }
        if !mv.from.is_diagonal_neighbor(mv.to) {
            return Err(MoveError::NotDiagonalStep {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(())
    }

    /// Returns `true` if the move from `(from_row, from_col)` to
    /// `(to_row, to_col)` is legal on this board.
    pub fn validate_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        self.check_move(from_row, from_col, to_row, to_col).is_ok()
    }

    /// Applies a move given as raw coordinates.
    ///
    /// # Returns
    ///
    /// `false` with the board untouched if the move is illegal, `true` once
    /// the piece has been moved (and promoted if it reached its last row).
    pub fn apply_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        match self.check_move(from_row, from_col, to_row, to_col) {
            Ok(mv) => self.make_move(mv).is_ok(),
            Err(_) => false,
        }
    }

    /// Moves a piece one diagonal step and promotes it on the far back rank.
    ///
    /// # Errors
    ///
    /// Returns the violated rule; the board is not modified in that case.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.check(mv) {
            trace!(%mv, %err, "move rejected");
            return Err(err);
        }

        let mut piece = self
            .cell_mut(mv.from)
            .take()
            .ok_or(MoveError::EmptySource(mv.from))?;
        let promoted = mv.to.row() == piece.color().promotion_row() && piece.promote();
        self.cell_mut(mv.to).set(piece);

        debug!(%mv, color = %piece.color(), promoted, "move applied");
        Ok(MoveOutcome {
            mv,
            piece,
            promoted,
        })
    }

    /// Prints the board to standard output with the default theme.
    pub fn render(&self) -> io::Result<()> {
        self.render_to(&mut io::stdout().lock(), &Theme::default())
    }

    /// Writes the board grid with row and column headers.
    ///
    /// Occupied cells show the piece glyph for its color; empty cells show the
    /// light or dark background glyph.
    pub fn render_to<W: Write>(&self, out: &mut W, theme: &Theme) -> io::Result<()> {
        write!(out, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(out, "{col}  ")?;
        }
        writeln!(out)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(out, "{row} ")?;
            for cell in cells {
                match cell.piece() {
                    Some(piece) => match piece.color() {
                        Color::White => write!(out, "{}", theme.white_piece)?,
                        Color::Black => write!(out, "{}", theme.black_piece)?,
                    },
                    None if cell.square().is_dark() => write!(out, "{}", theme.dark_cell())?,
                    None => write!(out, "{}", theme.light_cell())?,
                }
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

impl fmt::Display for Board {
    /// Formats the board as eight lines of ASCII, one character per square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            for cell in cells {
                let c = cell.piece().map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
