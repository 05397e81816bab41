use std::fmt;

/// The side a piece belongs to.
///
/// White starts on rows 5-7 and moves first. Black starts on rows 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    ///
    /// # Returns
    ///
    /// * `Color::Black` for `Color::White`
    /// * `Color::White` for `Color::Black`
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the row a man of this color must reach to become a king.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => crate::square::BOARD_SIZE - 1,
        }
    }

    /// Returns the human-readable name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn test_promotion_row() {
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::White.to_string(), "White");
        assert_eq!(Color::Black.to_string(), "Black");
    }
}
