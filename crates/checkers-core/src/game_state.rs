//! Turn tracking and the end-of-game condition.
//!
//! `GameState` owns the board and knows whose turn it is. It does not read
//! input or print anything; the console loop drives it.

use tracing::debug;

use crate::board::{Board, MoveOutcome};
use crate::color::Color;
use crate::error::MoveError;

/// Rule options that can be changed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Reject moves of pieces that belong to the side not on move.
    pub enforce_turn_order: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            enforce_turn_order: true,
        }
    }
}

/// Whether the game is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// State of a checkers game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    rules: Rules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameState {
    /// Creates a game in the starting position with White to move.
    pub fn new(rules: Rules) -> Self {
        Self::from_board(Board::new(), Color::White, rules)
    }

    /// Creates a game from an existing position.
    pub fn from_board(board: Board, side_to_move: Color, rules: Rules) -> Self {
        Self {
            board,
            side_to_move,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Validates and applies a move for the side on move.
    ///
    /// Board rules are checked first, then (if enabled) that the moving piece
    /// belongs to the side on move. The turn is not switched; call
    /// [`GameState::switch_turn`] once the move is accepted.
    ///
    /// # Errors
    ///
    /// Returns the violated rule; the board is not modified in that case.
    pub fn play(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveOutcome, MoveError> {
        let mv = self.board.check_move(from_row, from_col, to_row, to_col)?;
        if self.rules.enforce_turn_order {
            let owner = self.board.piece_at(mv.from).map(|piece| piece.color());
            if let Some(owner) = owner.filter(|&color| color != self.side_to_move) {
                return Err(MoveError::NotYourPiece {
                    to_move: self.side_to_move,
                    piece: owner,
                });
            }
        }
        self.board.make_move(mv)
    }

    /// Hands the move to the other side.
    pub fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        debug!(side_to_move = %self.side_to_move, "turn switched");
    }

    /// The game is over once at least one color has no pieces left.
    pub fn is_game_over(&self) -> bool {
        !(self.board.has_pieces(Color::White) && self.board.has_pieces(Color::Black))
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the color of the first piece found in row-major order once the
    /// game is over.
    ///
    /// # Returns
    ///
    /// `None` while the game is in progress or if the board is empty.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }
        self.board.pieces().next().map(|(_, piece)| piece.color())
    }
}
