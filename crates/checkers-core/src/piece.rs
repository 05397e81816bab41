use crate::color::Color;

/// Rank of a piece. A man becomes a king once and never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A single checker.
///
/// Pieces are plain values stored inside a cell's slot and moved from slot to
/// slot when a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    rank: Rank,
}

impl Piece {
    /// Creates a new man of the given color.
    pub fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    /// Creates a king of the given color.
    pub fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub fn rank(self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Promotes the piece to a king.
    ///
    /// # Returns
    ///
    /// `true` if the piece was a man and is now a king, `false` if it was
    /// already a king.
    pub fn promote(&mut self) -> bool {
        if self.is_king() {
            return false;
        }
        self.rank = Rank::King;
        true
    }

    /// Converts the piece to its ASCII representation.
    ///
    /// # Returns
    ///
    /// * `'w'` / `'W'` for a white man / king
    /// * `'b'` / `'B'` for a black man / king
    pub fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_man() {
        let piece = Piece::man(Color::Black);
        assert_eq!(piece.color(), Color::Black);
        assert_eq!(piece.rank(), Rank::Man);
        assert!(!piece.is_king());
    }

    #[test]
    fn test_promote_once() {
        let mut piece = Piece::man(Color::White);
        assert!(piece.promote());
        assert_eq!(piece.rank(), Rank::King);
        assert_eq!(piece.color(), Color::White);

        // Promoting a king changes nothing
        assert!(!piece.promote());
        assert_eq!(piece, Piece::king(Color::White));
    }

    #[test]
    fn test_to_char() {
        assert_eq!(Piece::man(Color::White).to_char(), 'w');
        assert_eq!(Piece::king(Color::White).to_char(), 'W');
        assert_eq!(Piece::man(Color::Black).to_char(), 'b');
        assert_eq!(Piece::king(Color::Black).to_char(), 'B');
    }
}
