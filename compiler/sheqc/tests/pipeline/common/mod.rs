//! Shared helpers for pipeline tests.

use sheqc::{run_source, Config, Error};

/// Evaluate with default settings, panicking with the diagnostic on failure.
pub fn eval_bytes(source: &str) -> Vec<u8> {
    match run_source(source, &Config::default()) {
        Ok(output) => output,
        Err(err) => panic!("{source:?} failed: {} error: {err}", err.category()),
    }
}

/// [`eval_bytes`] for programs whose output is valid UTF-8.
pub fn eval(source: &str) -> String {
    String::from_utf8(eval_bytes(source)).unwrap()
}

/// Evaluate with default settings, expecting a failure.
pub fn fail(source: &str) -> Error {
    match run_source(source, &Config::default()) {
        Ok(output) => panic!(
            "{source:?} unexpectedly evaluated to {}",
            String::from_utf8_lossy(&output)
        ),
        Err(err) => err,
    }
}

/// `(category, message)` of a failing run, as the binary would print them.
pub fn diagnostic(source: &str) -> (&'static str, String) {
    let err = fail(source);
    (err.category(), err.to_string())
}
