//! Rules for a minimal two-player console checkers game.
//!
//! Pieces move one diagonal step onto an empty dark square and are promoted
//! to kings on the far back rank. There are no captures.

pub mod board;
pub mod cell;
pub mod color;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod square;
pub mod theme;

pub use self::board::{Board, Move, MoveOutcome};
pub use self::cell::Cell;
pub use self::color::Color;
pub use self::error::MoveError;
pub use self::game_state::{GameState, GameStatus, Rules};
pub use self::piece::{Piece, Rank};
pub use self::square::{BOARD_SIZE, Square};
pub use self::theme::Theme;
