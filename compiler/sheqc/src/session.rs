//! Running one program end to end.

use tracing::debug;

use sheq_eval::{serialize_value, Interpreter};
use sheq_ir::{Arena, Interner};

use crate::{Config, Error};

/// Evaluates programs, each in an arena of its own.
///
/// Every [`evaluate`](Session::evaluate) starts from a fresh arena and
/// interner of the configured capacity and drops them when it returns, so
/// one run never affects the next. Sessions share nothing and may run on
/// separate threads.
pub struct Session {
    arena_capacity: usize,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            arena_capacity: config.arena_capacity,
        }
    }

    /// Evaluate one expression and serialize its value.
    ///
    /// The output is raw bytes: string values are printed exactly as stored.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn evaluate(&self, source: &str) -> Result<Vec<u8>, Error> {
        let mut arena = Arena::with_capacity(self.arena_capacity);
        let mut interner = Interner::new();

        let tokens = sheq_lexer::lex(source, &mut arena)?;
        let parsed = sheq_parse::parse(&tokens, &mut arena, &mut interner)?;
        let mut interp = Interpreter::new(&mut arena, &mut interner, &parsed.exprs)?;
        let value = interp.eval_program(parsed.root)?;
        let output = serialize_value(&value, interp.arena());
        debug!(
            arena_used = interp.arena().offset(),
            arena_remaining = interp.arena().remaining(),
            frames = interp.environment().frame_count(),
            "evaluated"
        );
        Ok(output)
    }
}
