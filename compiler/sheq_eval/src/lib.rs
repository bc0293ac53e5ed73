//! Evaluator for SHEQ.
//!
//! Walks the tree built by `sheq_parse`. Values are small `Copy` handles;
//! string contents and environment frames live in the evaluation's
//! [`Arena`](sheq_ir::Arena), so a run that allocates too much fails with
//! a resource-exhaustion error instead of growing without bound.
//!
//! - [`Environment`]: parent-linked frames of bindings
//! - [`Primitive`]: the built-in operations
//! - [`Interpreter`]: one rule per expression kind
//! - [`serialize_value`]: the output serialization, as raw bytes

mod display;
mod environment;
pub mod errors;
mod interpreter;
mod primitives;
mod value;

pub use display::{format_number, serialize_value};
pub use environment::{Environment, Frame, FrameId};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use primitives::{install_globals, values_equal, Primitive};
pub use value::{Closure, Value};

#[cfg(test)]
mod tests;
