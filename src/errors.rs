use thiserror::Error;

use crate::Anchoring;

/// The result type for the `markscan` crate.
pub type Result<T> = std::result::Result<T, ScanError>;

/// The error type for the `markscan` crate.
#[derive(Error, Debug)]
pub struct ScanError {
    /// The source of the error.
    pub source: Box<ScanErrorKind>,
}

impl ScanError {
    /// Create a new `ScanError`.
    pub fn new(kind: ScanErrorKind) -> Self {
        ScanError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ScanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum ScanErrorKind {
    /// A pattern with the wrong anchoring mode was passed to a regex operation.
    /// This is a bug in the calling grammar, not a property of the input.
    #[error("{operation} requires a {expected} pattern, got {found} pattern '{pattern}'")]
    AnchoringMismatch {
        /// The scanner operation that rejected the pattern.
        operation: &'static str,
        /// The anchoring the operation requires.
        expected: Anchoring,
        /// The anchoring of the pattern that was passed.
        found: Anchoring,
        /// The source of the rejected pattern.
        pattern: String,
    },

    /// An error occurred while compiling a regular expression.
    #[error("'{1}' {0}")]
    RegexBuildError(regex_automata::meta::BuildError, String),

    /// A flag letter in a pattern flag string is not supported.
    #[error("Unknown pattern flag '{0}'")]
    UnknownFlag(char),

    /// A flag string selects neither or both of the sticky and global modes.
    #[error("Flags '{0}' must contain exactly one of 'y' (sticky) or 'g' (global)")]
    MissingAnchoring(String),

    /// A node that requires a name was constructed with an empty one.
    #[error("Node name must not be empty")]
    EmptyName,
}

impl From<ScanErrorKind> for ScanError {
    fn from(kind: ScanErrorKind) -> Self {
        ScanError::new(kind)
    }
}
