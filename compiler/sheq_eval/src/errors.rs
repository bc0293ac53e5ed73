//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data of each failure. The factory
//! functions below (`unbound`, `type_mismatch`, ...) are how the evaluator
//! and the primitives build errors.

use std::{fmt, io};

use sheq_ir::{ArenaError, Location};

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Typed failure category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names
    Unbound {
        name: String,
    },

    // Types
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    NotCallable {
        got: &'static str,
    },

    // Calls
    ArityMismatch {
        callee: &'static str,
        expected: usize,
        got: usize,
    },

    // Domain
    DivisionByZero,
    SubstringOutOfRange {
        which: &'static str,
        index: i64,
        len: usize,
    },

    /// Raised by the `error` primitive; `message` is the serialized argument,
    /// kept as bytes because strings may hold any bytes.
    User {
        message: Vec<u8>,
    },

    /// The arena ran out.
    Arena(ArenaError),
}

impl EvalErrorKind {
    /// Failure class, as reported by the driver.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Unbound { .. } => "unbound-identifier",
            Self::TypeMismatch { .. } | Self::NotCallable { .. } => "type",
            Self::ArityMismatch { .. } => "arity",
            Self::DivisionByZero | Self::SubstringOutOfRange { .. } => "domain",
            Self::User { .. } => "user",
            Self::Arena(_) => "resource-exhaustion",
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbound { name } => write!(f, "unbound identifier: {name}"),
            Self::TypeMismatch { op, expected, got } => {
                write!(f, "{op} expects {expected}, got {got}")
            }
            Self::NotCallable { got } => write!(f, "cannot apply non-function ({got})"),
            Self::ArityMismatch {
                callee,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{callee} expects {expected} {arg_word}, got {got}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::SubstringOutOfRange { which, index, len } => {
                write!(f, "substring {which} {index} out of bounds for length {len}")
            }
            Self::User { message } => f.write_str(&String::from_utf8_lossy(message)),
            Self::Arena(err) => write!(f, "{err}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Innermost expression the error was raised at, if known.
    pub location: Option<Location>,
}

impl EvalError {
    #[cold]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            location: None,
        }
    }

    /// Attach `location` unless a more precise one is already set.
    #[must_use]
    pub fn or_at(mut self, location: Location) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }

    /// Location printed after the message. Exhaustion has none.
    fn reported_location(&self) -> Option<Location> {
        match self.kind {
            EvalErrorKind::Arena(_) => None,
            _ => self.location,
        }
    }

    /// Write the message as `Display` does, except that a user message is
    /// written as its raw bytes.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.kind {
            EvalErrorKind::User { message } => out.write_all(message)?,
            kind => write!(out, "{kind}")?,
        }
        match self.reported_location() {
            Some(location) => write!(out, " at {location}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match self.reported_location() {
            Some(location) => write!(f, " at {location}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EvalErrorKind::Arena(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for EvalError {
    #[cold]
    fn from(err: ArenaError) -> Self {
        EvalError::from_kind(EvalErrorKind::Arena(err))
    }
}

// Factory functions

/// Identifier not bound in any enclosing frame.
#[cold]
pub fn unbound(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Unbound {
        name: name.to_string(),
    })
}

/// `op` got a value of the wrong kind.
#[cold]
pub fn type_mismatch(op: &'static str, expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { op, expected, got })
}

/// Operator position held something other than a closure or primitive.
#[cold]
pub fn not_callable(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { got })
}

#[cold]
pub fn arity_mismatch(callee: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        callee,
        expected,
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// `which` is `"start"` or `"stop"`.
#[cold]
pub fn substring_out_of_range(which: &'static str, index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SubstringOutOfRange { which, index, len })
}

#[cold]
pub fn user_error(message: Vec<u8>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::User { message })
}
