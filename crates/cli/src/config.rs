//! Command-line configuration for the checkers console.

use checkers_core::{Rules, Theme};
use clap::{Parser, ValueEnum};

/// Named board themes selectable with `--theme`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeName {
    /// Circle pieces, white and purple squares, red errors
    Classic,
    /// Same glyphs without color escapes
    Plain,
}

/// Options for a console checkers session.
#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player console checkers")]
pub struct Config {
    /// Let either player move pieces of both colors
    #[arg(long)]
    pub allow_any_piece: bool,

    /// Board theme
    #[arg(long, value_enum, default_value_t = ThemeName::Classic)]
    pub theme: ThemeName,

    /// Disable colored output even on a terminal
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    /// Parse command-line arguments into a Config instance.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn rules(&self) -> Rules {
        Rules {
            enforce_turn_order: !self.allow_any_piece,
        }
    }

    /// Turns colored output off when `--no-color` was given.
    pub fn apply_color_choice(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeName::Classic => Theme::classic(),
            ThemeName::Plain => Theme::plain(),
        }
    }
}
