//! Lexer error type.

use std::fmt;

use sheq_ir::{ArenaError, Location};

/// Why tokenization stopped.
///
/// Tokenizing aborts on the first error; there is no recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    /// A `"` with no matching closing quote before end of input.
    /// `location` is the opening quote.
    UnterminatedString { location: Location },
    /// A byte that starts no token.
    UnexpectedChar { ch: char, location: Location },
    /// The arena ran out while storing tokens.
    Arena(ArenaError),
}

impl LexError {
    /// Source position, if the error has one.
    pub fn location(&self) -> Option<Location> {
        match self {
            LexError::UnterminatedString { location } | LexError::UnexpectedChar { location, .. } => {
                Some(*location)
            }
            LexError::Arena(_) => None,
        }
    }
}

impl From<ArenaError> for LexError {
    fn from(err: ArenaError) -> Self {
        LexError::Arena(err)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedString { location } => {
                write!(f, "unterminated string at {location}")
            }
            LexError::UnexpectedChar { ch, location } => {
                write!(f, "unexpected '{}' at {location}", ch.escape_debug())
            }
            LexError::Arena(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexError::Arena(err) => Some(err),
            _ => None,
        }
    }
}
