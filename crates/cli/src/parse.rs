//! Parsing of the player's input lines.

use std::fmt;

/// A line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Four coordinates, plus any tokens that followed them
    Move(MoveInput),
    Help,
    Quit,
    /// Blank line
    Empty,
}

/// Coordinates `from_row from_col to_row to_col` as typed.
///
/// The values are not range-checked here; the board reports off-board
/// coordinates as an invalid move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInput {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
    /// Tokens after the fourth number, echoed back to the player.
    pub extra: Vec<String>,
}

/// Why a line could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Fewer than four numbers on the line
    MissingCoordinates { found: usize },
    /// One of the first four tokens is not an integer
    NotAnInteger(String),
    /// The line was not valid UTF-8
    NotUtf8,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::MissingCoordinates { found } => write!(
                f,
                "expected four numbers (fromRow fromCol toRow toCol), found {found}"
            ),
            ParseMoveError::NotAnInteger(token) => write!(f, "'{token}' is not a whole number"),
            ParseMoveError::NotUtf8 => write!(f, "the line is not valid text"),
        }
    }
}

impl std::error::Error for ParseMoveError {}

/// Parses one input line.
///
/// `quit`/`q` and `help`/`h` are recognised in any case. Anything else must
/// start with four whitespace-separated integers.
pub fn parse_line(line: &str) -> Result<Command, ParseMoveError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(Command::Empty);
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "q" => return Ok(Command::Quit),
        "help" | "h" => return Ok(Command::Help),
        _ => {}
    }

    let mut coords = [0i32; 4];
    let mut found = 0;
    for token in std::iter::once(first).chain(tokens.by_ref().take(3)) {
        coords[found] = token
            .parse()
            .map_err(|_| ParseMoveError::NotAnInteger(token.to_string()))?;
        found += 1;
    }
    if found < coords.len() {
        return Err(ParseMoveError::MissingCoordinates { found });
    }

    let [from_row, from_col, to_row, to_col] = coords;
    Ok(Command::Move(MoveInput {
        from_row,
        from_col,
        to_row,
        to_col,
        extra: tokens.map(str::to_string).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from_row: i32, from_col: i32, to_row: i32, to_col: i32, extra: &[&str]) -> Command {
        Command::Move(MoveInput {
            from_row,
            from_col,
            to_row,
            to_col,
            extra: extra.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_line("5 0 4 1"), Ok(mv(5, 0, 4, 1, &[])));
    }

    #[test]
    fn test_parse_move_extra_whitespace() {
        assert_eq!(parse_line("  5\t0   4 1  "), Ok(mv(5, 0, 4, 1, &[])));
    }

    #[test]
    fn test_parse_move_keeps_extra_tokens() {
        assert_eq!(
            parse_line("5 0 4 1 please now"),
            Ok(mv(5, 0, 4, 1, &["please", "now"]))
        );
    }

    #[test]
    fn test_parse_negative_and_large_numbers() {
        assert_eq!(parse_line("-1 0 9 12"), Ok(mv(-1, 0, 9, 12, &[])));
    }

    #[test]
    fn test_parse_missing_coordinates() {
        assert_eq!(
            parse_line("5 0 4"),
            Err(ParseMoveError::MissingCoordinates { found: 3 })
        );
    }

    #[test]
    fn test_parse_not_an_integer() {
        assert_eq!(
            parse_line("5 x 4 1"),
            Err(ParseMoveError::NotAnInteger("x".to_string()))
        );
        assert_eq!(
            parse_line("a b c d"),
            Err(ParseMoveError::NotAnInteger("a".to_string()))
        );
        assert_eq!(
            parse_line("5 0 4 1.5"),
            Err(ParseMoveError::NotAnInteger("1.5".to_string()))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("quit"), Ok(Command::Quit));
        assert_eq!(parse_line("Q"), Ok(Command::Quit));
        assert_eq!(parse_line("help"), Ok(Command::Help));
        assert_eq!(parse_line("h"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_line(""), Ok(Command::Empty));
        assert_eq!(parse_line("   "), Ok(Command::Empty));
    }
}
