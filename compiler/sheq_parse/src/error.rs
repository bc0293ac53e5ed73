//! Parse error types.

use std::fmt;

use sheq_ir::{ArenaError, Location, TokenKind};

/// Which name list a duplicate or keyword name was found in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameList {
    /// `{lambda (a b) : ...}`
    Parameter,
    /// `{let {[a = ...]} in ... end}`
    Binding,
}

impl NameList {
    fn as_str(self) -> &'static str {
        match self {
            NameList::Parameter => "parameter",
            NameList::Binding => "binding",
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token or an expression was missing.
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    /// The same name appears twice in one list.
    DuplicateName { name: String, list: NameList },
    /// A keyword was used where a name is required.
    KeywordAsName { keyword: TokenKind, list: NameList },
    /// Something follows the single top-level expression.
    TrailingInput { found: TokenKind },
    /// Number text that does not convert to `f64`.
    InvalidNumber { text: String },
    /// The arena ran out while building the tree.
    Arena(ArenaError),
}

/// Syntax failure at a token.
///
/// Parsing stops at the first one; there is no partial tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Position of the offending token.
    pub location: Location,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, location: Location) -> Self {
        ParseError { kind, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")?;
            }
            ParseErrorKind::DuplicateName { name, list } => {
                write!(f, "duplicate {} '{name}'", list.as_str())?;
            }
            ParseErrorKind::KeywordAsName { keyword, list } => {
                write!(f, "keyword {keyword} cannot be used as a {} name", list.as_str())?;
            }
            ParseErrorKind::TrailingInput { found } => {
                write!(f, "unexpected {found} after expression")?;
            }
            ParseErrorKind::InvalidNumber { text } => {
                write!(f, "invalid number '{text}'")?;
            }
            // Exhaustion has no meaningful source position.
            ParseErrorKind::Arena(err) => return err.fmt(f),
        }
        write!(f, " at {}", self.location)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Arena(err) => Some(err),
            _ => None,
        }
    }
}
