//! End-to-end evaluation tests: source text in, serialized value out.
//!
//! - `language`: evaluation rules and the documented example programs
//! - `failures`: each error kind, with the location it is reported at

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{serialize_value, EvalError, Interpreter};
use sheq_ir::{Arena, Interner};

/// Lex, parse and evaluate `source` in a fresh arena of `capacity` bytes.
///
/// Lexing and parsing are expected to succeed.
pub(crate) fn run_with_capacity(source: &str, capacity: usize) -> Result<Vec<u8>, EvalError> {
    let mut arena = Arena::with_capacity(capacity);
    let mut interner = Interner::new();
    let tokens = sheq_lexer::lex(source, &mut arena).unwrap();
    let parsed = sheq_parse::parse(&tokens, &mut arena, &mut interner).unwrap();
    let mut interp = Interpreter::new(&mut arena, &mut interner, &parsed.exprs)?;
    let value = interp.eval_program(parsed.root)?;
    Ok(serialize_value(&value, interp.arena()))
}

pub(crate) fn run_bytes(source: &str) -> Result<Vec<u8>, EvalError> {
    run_with_capacity(source, 256 * 1024)
}

/// Like [`run_bytes`], for programs whose output is valid UTF-8.
pub(crate) fn run(source: &str) -> Result<String, EvalError> {
    run_bytes(source).map(|out| String::from_utf8(out).unwrap())
}

pub(crate) fn eval_ok(source: &str) -> String {
    match run(source) {
        Ok(out) => out,
        Err(err) => panic!("{source} failed: {err}"),
    }
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    match run(source) {
        Ok(out) => panic!("{source} evaluated to {out}"),
        Err(err) => err,
    }
}
