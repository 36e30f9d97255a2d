//! Module with the position type and functions.
//! A position is a struct that contains a line and column number.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Scanner;

/// A position in the input.
/// The position is represented by a line and column number.
/// The line and column numbers are 1-based. Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self { line, column }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A trait for providing the line and column information of a given character index.
pub trait PositionProvider {
    /// Returns the position of the character at the given index.
    /// Indices past the end of the input are clamped to the end.
    fn position_of(&self, index: usize) -> Position;

    /// Returns the position of the cursor.
    fn current_position(&self) -> Position;
}

impl PositionProvider for Scanner<'_> {
    /// Only `\n` starts a new line, so `\r\n` counts as a single line break.
    fn position_of(&self, index: usize) -> Position {
        self.slice(0, index)
            .chars()
            .fold(Position::default(), |mut pos, c| {
                if c == '\n' {
                    pos.line += 1;
                    pos.column = 1;
                } else {
                    pos.column += 1;
                }
                pos
            })
    }

    fn current_position(&self) -> Position {
        self.position_of(self.position())
    }
}
