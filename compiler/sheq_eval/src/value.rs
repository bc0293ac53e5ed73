//! Runtime values.

use sheq_ir::{ByteSpan, ExprId, NameRange};

use crate::environment::FrameId;
use crate::primitives::Primitive;

/// A SHEQ value.
///
/// Values are small and `Copy`: strings point into the arena and closures
/// refer to their body and environment by handle. Nothing reachable from a
/// value is ever mutated.
#[derive(Copy, Clone, Debug)]
pub enum Value {
    Number(f64),
    /// Raw bytes in the arena. Escapes from the source are not interpreted.
    Str(ByteSpan),
    Bool(bool),
    Closure(Closure),
    Primitive(Primitive),
}

/// A lambda together with the environment it was created in.
#[derive(Copy, Clone, Debug)]
pub struct Closure {
    pub params: NameRange,
    pub body: ExprId,
    /// Definition-time environment. Each call extends this frame, never the
    /// caller's.
    pub env: FrameId,
}

impl Value {
    /// Name of the value's kind, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Closure(_) => "closure",
            Value::Primitive(_) => "primitive",
        }
    }
}
