//! Error types for the checkers console.
//!
//! Rule violations and malformed input are reported to the player and never
//! reach this type; only failures that end the session do.

use std::error::Error;
use std::fmt;
use std::io;

use rustyline::error::ReadlineError;

#[derive(Debug)]
pub enum CliError {
    /// Writing to the console failed
    Io(io::Error),
    /// The line editor failed to read input
    Readline(ReadlineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "IO error: {err}"),
            CliError::Readline(err) => write!(f, "Input error: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Readline(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Readline(err)
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
