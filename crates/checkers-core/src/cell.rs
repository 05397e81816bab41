use crate::piece::Piece;
use crate::square::Square;

/// One square of the board together with its occupant.
///
/// The position never changes; only the occupant slot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    square: Square,
    piece: Option<Piece>,
}

impl Cell {
    pub fn new(square: Square) -> Self {
        Self {
            square,
            piece: None,
        }
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.square.row()
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.square.col()
    }

    #[inline]
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Puts `piece` into the slot, returning the previous occupant.
    pub(crate) fn set(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }

    /// Empties the slot, returning what was in it.
    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
