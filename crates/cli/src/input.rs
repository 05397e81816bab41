//! Line input for the console loop.

use std::io;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::error::Result;

/// One line of input as read from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The bytes were consumed but are not valid UTF-8
    NotUtf8,
}

/// Source of input lines.
pub trait LineSource {
    /// Reads one line after showing `prompt`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when input has ended (end of file or interrupt).
    fn read_line(&mut self, prompt: &str) -> Result<Option<Line>>;
}

/// Interactive line editor with history.
pub struct Editor {
    rl: DefaultEditor,
}

impl Editor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<Line>> {
        let read = self.rl.readline(prompt);
        if let Ok(line) = &read {
            let _ = self.rl.add_history_entry(line.as_str());
        }
        classify(read)
    }
}

/// Maps a line editor result to a line, end of input, or a fatal error.
///
/// Invalid UTF-8 only spoils the current line, so it is not fatal.
fn classify(read: std::result::Result<String, ReadlineError>) -> Result<Option<Line>> {
    match read {
        Ok(line) => Ok(Some(Line::Text(line))),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
            Ok(Some(Line::NotUtf8))
        }
        Err(err) => Err(err.into()),
    }
}

/// Fixed list of lines, for driving the game loop in tests.
#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<Line>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self::from_lines(lines.iter().map(|line| Line::Text(line.to_string())))
    }

    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<Line>> {
        Ok(self.lines.pop_front())
    }
}
