//! Built-in operations and the global frame.
//!
//! Primitives are a closed set dispatched through one `match`. Each one
//! checks its argument count, then its argument kinds, before computing.

use sheq_ir::{Arena, ArenaError, ByteSpan, Interner};
use tracing::trace;

use crate::display::serialize_value;
use crate::environment::{Environment, FrameId};
use crate::errors::{
    arity_mismatch, division_by_zero, substring_out_of_range, type_mismatch, user_error,
    EvalResult,
};
use crate::value::Value;

/// A built-in operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Add,
    Sub,
    Mul,
    Div,
    LessEq,
    Equal,
    Substring,
    Strlen,
    Error,
}

impl Primitive {
    /// Every primitive, in the order it is bound into the global frame.
    pub const ALL: [Primitive; 9] = [
        Primitive::Add,
        Primitive::Sub,
        Primitive::Mul,
        Primitive::Div,
        Primitive::LessEq,
        Primitive::Equal,
        Primitive::Substring,
        Primitive::Strlen,
        Primitive::Error,
    ];

    /// Name the primitive is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Add => "+",
            Primitive::Sub => "-",
            Primitive::Mul => "*",
            Primitive::Div => "/",
            Primitive::LessEq => "<=",
            Primitive::Equal => "equal?",
            Primitive::Substring => "substring",
            Primitive::Strlen => "strlen",
            Primitive::Error => "error",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Primitive::Strlen | Primitive::Error => 1,
            Primitive::Substring => 3,
            _ => 2,
        }
    }

    /// Apply to already-evaluated arguments.
    ///
    /// `arena` is only read: string results are sub-spans of their input.
    pub fn call(self, args: &[Value], arena: &Arena) -> EvalResult {
        trace!(primitive = self.name(), argc = args.len(), "primitive call");
        if args.len() != self.arity() {
            return Err(arity_mismatch(self.name(), self.arity(), args.len()));
        }
        let op = self.name();
        match self {
            Primitive::Add => {
                let (a, b) = numbers(op, args)?;
                Ok(Value::Number(a + b))
            }
            Primitive::Sub => {
                let (a, b) = numbers(op, args)?;
                Ok(Value::Number(a - b))
            }
            Primitive::Mul => {
                let (a, b) = numbers(op, args)?;
                Ok(Value::Number(a * b))
            }
            Primitive::Div => {
                let (a, b) = numbers(op, args)?;
                if b == 0.0 {
                    return Err(division_by_zero());
                }
                Ok(Value::Number(a / b))
            }
            Primitive::LessEq => {
                let (a, b) = numbers(op, args)?;
                Ok(Value::Bool(a <= b))
            }
            Primitive::Equal => Ok(Value::Bool(values_equal(&args[0], &args[1], arena))),
            Primitive::Substring => {
                let string = expect_string(op, &args[0])?;
                let start = expect_number(op, &args[1])?;
                let stop = expect_number(op, &args[2])?;
                substring(string, start, stop)
            }
            Primitive::Strlen => {
                let string = expect_string(op, &args[0])?;
                #[allow(clippy::cast_precision_loss, reason = "lengths are far below 2^53")]
                let len = string.len() as f64;
                Ok(Value::Number(len))
            }
            Primitive::Error => Err(user_error(serialize_value(&args[0], arena))),
        }
    }
}

/// `equal?`: numbers by value, strings by bytes, booleans by value.
/// Closures and primitives are never equal to anything, themselves included.
pub fn values_equal(lhs: &Value, rhs: &Value, arena: &Arena) -> bool {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => arena.bytes(*a) == arena.bytes(*b),
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}

/// Exclusive-end slice. Bounds are truncated toward zero first.
#[allow(
    clippy::cast_possible_truncation,
    reason = "bounds are truncated toward zero like a C int conversion, saturating at the ends"
)]
fn substring(string: ByteSpan, start: f64, stop: f64) -> EvalResult {
    let len = string.len();
    let max = i64::try_from(len).unwrap_or(i64::MAX);
    let start = start as i64;
    let stop = stop as i64;

    if start < 0 || start > max {
        return Err(substring_out_of_range("start", start, len));
    }
    if stop < start || stop > max {
        return Err(substring_out_of_range("stop", stop, len));
    }

    usize::try_from(start)
        .ok()
        .zip(usize::try_from(stop).ok())
        .and_then(|(start, stop)| string.slice(start, stop))
        .map(Value::Str)
        .ok_or_else(|| substring_out_of_range("stop", stop, len))
}

fn numbers(op: &'static str, args: &[Value]) -> Result<(f64, f64), crate::EvalError> {
    Ok((expect_number(op, &args[0])?, expect_number(op, &args[1])?))
}

fn expect_number(op: &'static str, value: &Value) -> Result<f64, crate::EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(type_mismatch(op, "number", other.type_name())),
    }
}

fn expect_string(op: &'static str, value: &Value) -> Result<ByteSpan, crate::EvalError> {
    match value {
        Value::Str(s) => Ok(*s),
        other => Err(type_mismatch(op, "string", other.type_name())),
    }
}

/// Build the global frame: every primitive, then `true` and `false`.
pub fn install_globals(
    env: &mut Environment,
    arena: &mut Arena,
    interner: &mut Interner,
) -> Result<FrameId, ArenaError> {
    let global = env.create(arena, None)?;
    for primitive in Primitive::ALL {
        let name = interner.intern(arena, primitive.name())?;
        env.bind(arena, global, name, Value::Primitive(primitive))?;
    }
    for (text, value) in [("true", true), ("false", false)] {
        let name = interner.intern(arena, text)?;
        env.bind(arena, global, name, Value::Bool(value))?;
    }
    Ok(global)
}
