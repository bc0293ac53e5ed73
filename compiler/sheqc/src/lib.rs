//! SHEQ driver.
//!
//! Glues the phases together: [`Session`] runs lex, parse and evaluate
//! against a fresh arena per program, [`Error`] tags a failure with its category, and
//! [`init_tracing`] wires up diagnostics logging for the `sheq` binary.

mod config;
mod error;
mod session;

pub use config::{Config, ConfigError, ARENA_BYTES_VAR};
pub use error::Error;
pub use session::Session;

use std::sync::Once;

/// Evaluate `source` and return the serialized value.
pub fn run_source(source: &str, config: &Config) -> Result<Vec<u8>, Error> {
    Session::new(config).evaluate(source)
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Reads the filter from `SHEQ_LOG`, falling back to `RUST_LOG`; does
/// nothing when neither is set. Output goes to stderr so stdout only ever
/// carries the result. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = ["SHEQ_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .with(filter)
            .init();
    });
}
