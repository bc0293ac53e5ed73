//! Umbrella error for the whole pipeline.

use std::io;

use sheq_eval::EvalError;
use sheq_lexer::LexError;
use sheq_parse::{ParseError, ParseErrorKind};

use crate::config::ConfigError;

/// Any failure of a run, tagged by the phase that produced it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Failure class printed before the message, e.g. `syntax` or `arity`.
    ///
    /// Arena exhaustion is reported as `resource-exhaustion` whichever phase
    /// ran out.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Lex(LexError::Arena(_))
            | Error::Parse(ParseError {
                kind: ParseErrorKind::Arena(_),
                ..
            }) => "resource-exhaustion",
            Error::Lex(_) => "lexical",
            Error::Parse(_) => "syntax",
            Error::Eval(err) => err.kind.category(),
            Error::Config(_) => "configuration",
        }
    }

    /// Write the one-line diagnostic `sheq: <category> error: <message>`.
    ///
    /// A message raised by the `error` primitive is written as its raw
    /// bytes, like a printed string value.
    pub fn write_diagnostic<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "sheq: {} error: ", self.category())?;
        match self {
            Error::Eval(err) => err.write_to(out)?,
            other => write!(out, "{other}")?,
        }
        out.write_all(b"\n")
    }
}
