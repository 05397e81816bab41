//! Glyph and color table used when printing the board.

use colored::{Color, ColoredString, Colorize};

/// Presentation settings for the console board.
///
/// Colors are optional; a `None` color prints the glyph as-is with no escape
/// codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub white_piece: &'static str,
    pub black_piece: &'static str,
    pub light_cell: &'static str,
    pub dark_cell: &'static str,
    pub light_cell_color: Option<Color>,
    pub dark_cell_color: Option<Color>,
    pub error_color: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Circle glyphs for pieces, white/purple squares, red errors.
    pub fn classic() -> Self {
        Self {
            white_piece: "⚪ ",
            black_piece: "⚫ ",
            light_cell: " □ ",
            dark_cell: " ■ ",
            light_cell_color: Some(Color::White),
            dark_cell_color: Some(Color::Magenta),
            error_color: Some(Color::Red),
        }
    }

    /// Same glyphs as [`Theme::classic`] without any color escapes.
    pub fn plain() -> Self {
        Self {
            light_cell_color: None,
            dark_cell_color: None,
            error_color: None,
            ..Self::classic()
        }
    }

    pub fn light_cell(&self) -> ColoredString {
        paint(self.light_cell, self.light_cell_color)
    }

    pub fn dark_cell(&self) -> ColoredString {
        paint(self.dark_cell, self.dark_cell_color)
    }

    /// Styles an error message.
    pub fn error(&self, text: &str) -> ColoredString {
        paint(text, self.error_color)
    }
}

/// Runs `f` with color output forced on, one caller at a time.
#[cfg(test)]
pub(crate) fn with_colors_forced<T>(f: impl FnOnce() -> T) -> T {
    static OVERRIDE: std::sync::Mutex<()> = std::sync::Mutex::new(());

    let _guard = OVERRIDE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    colored::control::set_override(true);
    let result = f();
    colored::control::unset_override();
    result
}

fn paint(text: &str, color: Option<Color>) -> ColoredString {
    match color {
        Some(color) => text.color(color),
        None => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.light_cell().to_string(), " □ ");
        assert_eq!(theme.dark_cell().to_string(), " ■ ");
        assert_eq!(theme.error("Invalid move!").to_string(), "Invalid move!");
    }

    #[test]
    fn test_classic_colors() {
        let theme = Theme::classic();
        assert_eq!(theme.light_cell_color, Some(Color::White));
        assert_eq!(theme.dark_cell_color, Some(Color::Magenta));
        assert_eq!(theme.error_color, Some(Color::Red));
        assert_eq!(theme.white_piece, Theme::plain().white_piece);
    }

    #[test]
    fn test_classic_error_escape() {
        let theme = Theme::classic();
        let painted = with_colors_forced(|| theme.error("Invalid move!").to_string());
        assert_eq!(painted, "\x1b[31mInvalid move!\x1b[0m");
    }
}
