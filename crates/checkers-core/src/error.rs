//! Reasons a move can be rejected.

use std::error::Error;
use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Rule violation detected while validating a move.
///
/// A rejected move never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate lies outside `[0, 8)`
    OutOfBounds { row: i32, col: i32 },
    /// There is no piece on the source square
    EmptySource(Square),
    /// The destination square already holds a piece
    OccupiedDestination(Square),
    /// The move is not exactly one diagonal step
    NotDiagonalStep { from: Square, to: Square },
    /// The piece belongs to the player who is not on move
    NotYourPiece { to_move: Color, piece: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "{row},{col} is off the board (rows and columns are 0-7)")
            }
            MoveError::EmptySource(sq) => write!(f, "there is no piece on {sq}"),
            MoveError::OccupiedDestination(sq) => write!(f, "{sq} is already occupied"),
            MoveError::NotDiagonalStep { from, to } => {
                write!(f, "{from} -> {to} is not a single diagonal step")
            }
            MoveError::NotYourPiece { to_move, piece } => {
                write!(f, "it is {to_move}'s turn, that piece is {piece}")
            }
        }
    }
}

impl Error for MoveError {}
