// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-pipeline tests through the public driver API.
//!
//! # Organization
//!
//! - `common/` - helpers for running sources and matching failures
//! - `properties` - the language's documented behavioral properties
//! - `errors` - category and message of each failure class
//! - `sessions` - session reuse, capacity limits, threads
//! - `cli` - the `sheq` binary's arguments, output and exit status
//!
//! ```bash
//! cargo test -p sheqc --test pipeline
//! ```

#[path = "pipeline/common/mod.rs"]
mod common;

#[path = "pipeline/properties.rs"]
mod properties;

#[path = "pipeline/errors.rs"]
mod errors;

#[path = "pipeline/sessions.rs"]
mod sessions;

#[path = "pipeline/cli.rs"]
mod cli;
