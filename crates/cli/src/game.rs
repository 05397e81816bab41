//! The turn loop.
//!
//! `Game` prints the board, asks the player on move for a move, switches
//! turns and stops once one color has no pieces left or a player quits.

use std::io::Write;

use checkers_core::{Color, GameState, Rules, Theme};
use tracing::info;

use crate::error::Result;
use crate::input::LineSource;
use crate::player::{Player, TurnResult};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A color ran out of pieces. Holds the color of the first piece left on
    /// the board, if any.
    Finished(Option<Color>),
    /// A player quit before the game was decided
    Abandoned,
}

pub struct Game {
    state: GameState,
    white: Player,
    black: Player,
    theme: Theme,
}

impl Game {
    /// Creates a game between two console players, White to move.
    pub fn new(rules: Rules, theme: Theme) -> Self {
        Self::from_state(GameState::new(rules), theme)
    }

    pub fn from_state(state: GameState, theme: Theme) -> Self {
        Self {
            state,
            white: Player::human(Color::White),
            black: Player::human(Color::Black),
            theme,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn current_player(&self) -> Player {
        match self.state.side_to_move() {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Plays until the game is over or a player quits.
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<GameEnd>
    where
        I: LineSource,
        W: Write,
    {
        info!(
            white = ?self.white.kind(),
            black = ?self.black.kind(),
            rules = ?self.state.rules(),
            "game started"
        );

        while !self.state.is_game_over() {
            self.state.board().render_to(out, &self.theme)?;
            writeln!(out, "{}'s turn.", self.state.side_to_move())?;

            let player = self.current_player();
            match player.take_turn(&mut self.state, input, out, &self.theme)? {
                TurnResult::Moved(outcome) => {
                    info!(color = %player.color(), mv = %outcome.mv, "move played");
                    self.state.switch_turn();
                }
                TurnResult::Quit => {
                    writeln!(out, "Game abandoned.")?;
                    info!(color = %player.color(), "game abandoned");
                    return Ok(GameEnd::Abandoned);
                }
            }
        }

        self.show_winner(out)?;
        Ok(GameEnd::Finished(self.state.winner()))
    }

    fn show_winner<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "Game over! ")?;
        match self.state.winner() {
            Some(color) => {
                writeln!(out, "Winner: {color}")?;
                info!(winner = %color, "game over");
            }
            None => {
                writeln!(out)?;
                info!("game over with an empty board");
            }
        }
        Ok(())
    }
}
