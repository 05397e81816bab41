//! A seat at the board and the prompt loop for one turn.

use std::io::Write;

use checkers_core::{Color, GameState, MoveOutcome, Theme};
use tracing::{debug, info};

use crate::error::Result;
use crate::input::{Line, LineSource};
use crate::parse::{Command, ParseMoveError, parse_line};

pub const PROMPT: &str = "Enter move (fromRow fromCol toRow toCol): ";

const HELP: &str = "\
Type four numbers: the row and column of the piece, then the row and column
of the empty square one diagonal step away, e.g. `5 0 4 1`.
Rows and columns run from 0 to 7. Type `quit` to leave the game.";

/// Who is sitting in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are typed at the console
    Human,
}

/// Result of asking a player for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Moved(MoveOutcome),
    /// The player quit or input ended
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    color: Color,
    kind: PlayerKind,
}

impl Player {
    pub fn human(color: Color) -> Self {
        Self {
            color,
            kind: PlayerKind::Human,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Prompts until a move is applied to `game` or the player quits.
    ///
    /// Extra tokens after the four coordinates are echoed back. Malformed
    /// lines and illegal moves are reported and the player is asked again.
    pub fn take_turn<I, W>(
        &self,
        game: &mut GameState,
        input: &mut I,
        out: &mut W,
        theme: &Theme,
    ) -> Result<TurnResult>
    where
        I: LineSource,
        W: Write,
    {
        loop {
            let Some(line) = input.read_line(PROMPT)? else {
                info!(color = %self.color, "input closed");
                return Ok(TurnResult::Quit);
            };

            let parsed = match line {
                Line::Text(text) => parse_line(&text),
                Line::NotUtf8 => Err(ParseMoveError::NotUtf8),
            };
            let request = match parsed {
                Ok(Command::Move(request)) => request,
                Ok(Command::Empty) => continue,
                Ok(Command::Quit) => return Ok(TurnResult::Quit),
                Ok(Command::Help) => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                Err(err) => {
                    writeln!(out, "{} {err}", theme.error("Could not read move:"))?;
                    continue;
                }
            };

            if !request.extra.is_empty() {
                writeln!(out, "{}", request.extra.join(" "))?;
            }

            match game.play(
                request.from_row,
                request.from_col,
                request.to_row,
                request.to_col,
            ) {
                Ok(outcome) => {
                    if outcome.promoted {
                        writeln!(out, "{} is crowned on {}!", self.color, outcome.mv.to)?;
                    }
                    return Ok(TurnResult::Moved(outcome));
                }
                Err(err) => {
                    debug!(color = %self.color, %err, "invalid move entered");
                    writeln!(out, "{} {err}", theme.error("Invalid move!"))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Line, ScriptedInput};
    use checkers_core::{Board, Piece, Rules, Square};

    fn run_turn(game: &mut GameState, lines: &[&str]) -> (TurnResult, String, usize) {
        let mut input = ScriptedInput::new(lines);
        let mut out = Vec::new();
        let player = Player::human(game.side_to_move());
        let result = player
            .take_turn(game, &mut input, &mut out, &Theme::plain())
            .unwrap();
        (result, String::from_utf8(out).unwrap(), input.remaining())
    }

    #[test]
    fn test_valid_move_first_try() {
        let mut game = GameState::default();
        let (result, out, remaining) = run_turn(&mut game, &["5 0 4 1", "5 2 4 3"]);
        assert!(matches!(result, TurnResult::Moved(_)));
        assert_eq!(out, "");
        assert_eq!(remaining, 1);
        assert!(game.board().piece_at(Square::from_row_col(4, 1)).is_some());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut game = GameState::default();
        let (result, out, remaining) =
            run_turn(&mut game, &["", "5 0 4 0", "five 0 4 1", "5 0", "5 0 4 1"]);
        assert!(matches!(result, TurnResult::Moved(_)));
        assert_eq!(remaining, 0);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Invalid move! 5,0 -> 4,0"));
        assert_eq!(lines[1], "Could not read move: 'five' is not a whole number");
        assert!(lines[2].starts_with("Could not read move: expected four numbers"));
    }

    #[test]
    fn test_malformed_input_is_not_read_as_zero() {
        // Rejected outright rather than read as "0 0 0 0"
        let mut game = GameState::default();
        let before = game.board().clone();
        let (result, _, _) = run_turn(&mut game, &["x y z w"]);
        assert_eq!(result, TurnResult::Quit);
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_extra_tokens_are_echoed() {
        let mut game = GameState::default();
        let (_, out, _) = run_turn(&mut game, &["5 0 4 0 oops", "5 0 4 1 thanks a lot"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "oops");
        assert!(lines[1].starts_with("Invalid move!"));
        assert_eq!(lines[2], "thanks a lot");
    }

    #[test]
    fn test_other_color_rejected() {
        let mut game = GameState::default();
        let (result, out, _) = run_turn(&mut game, &["2 1 3 0", "quit"]);
        assert_eq!(result, TurnResult::Quit);
        assert!(out.contains("it is White's turn, that piece is Black"));
        assert!(game.board().piece_at(Square::from_row_col(2, 1)).is_some());
    }

    #[test]
    fn test_other_color_allowed_when_not_enforced() {
        let mut game = GameState::new(Rules {
            enforce_turn_order: false,
        });
        let (result, _, _) = run_turn(&mut game, &["2 1 3 0"]);
        assert!(matches!(result, TurnResult::Moved(_)));
    }

    #[test]
    fn test_promotion_is_announced() {
        let mut board = Board::empty();
        board
            .place(Square::from_row_col(1, 2), Piece::man(Color::White))
            .unwrap();
        board
            .place(Square::from_row_col(6, 1), Piece::man(Color::Black))
            .unwrap();
        let mut game = GameState::from_board(board, Color::White, Rules::default());
        let (result, out, _) = run_turn(&mut game, &["1 2 0 1"]);
        match result {
            TurnResult::Moved(outcome) => {
                assert!(outcome.promoted);
                assert_eq!(outcome.piece, Piece::king(Color::White));
            }
            TurnResult::Quit => panic!("expected a move"),
        }
        assert_eq!(out, "White is crowned on 0,1!\n");
    }

    #[test]
    fn test_help_and_quit() {
        let mut game = GameState::default();
        let (result, out, remaining) = run_turn(&mut game, &["help", "q", "5 0 4 1"]);
        assert_eq!(result, TurnResult::Quit);
        assert!(out.contains("Type four numbers"));
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut game = GameState::default();
        let (result, _, _) = run_turn(&mut game, &[]);
        assert_eq!(result, TurnResult::Quit);
    }

    #[test]
    fn test_unreadable_line_reprompts() {
        let mut game = GameState::default();
        let mut input = ScriptedInput::from_lines([
            Line::NotUtf8,
            Line::Text("5 0 4 1".to_string()),
        ]);
        let mut out = Vec::new();
        let result = Player::human(Color::White)
            .take_turn(&mut game, &mut input, &mut out, &Theme::plain())
            .unwrap();

        assert!(matches!(result, TurnResult::Moved(_)));
        assert_eq!(input.remaining(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Could not read move: the line is not valid text\n"
        );
        assert_eq!(
            game.board().piece_at(Square::from_row_col(4, 1)),
            Some(Piece::man(Color::White))
        );
    }
}
