//! Value serialization: the single output line of a successful run.
//!
//! Numbers use C's `%.15g` rules, strings are quoted with `"`, `\` and
//! newline escaped, and procedures print as opaque markers. Output is raw
//! bytes and its length is not limited.

use sheq_ir::Arena;

use crate::value::Value;

/// Significant digits for numbers.
const PRECISION: i32 = 15;

/// Format `value` like C `printf("%.15g", value)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to PRECISION significant digits once, in scientific form; the
    // exponent of that rounded value picks the notation.
    let sci = format!("{:.*e}", (PRECISION - 1).unsigned_abs() as usize, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_fraction_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent).unsigned_abs() as usize;
        strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

/// `1.2500` -> `1.25`, `3.000` -> `3`. Integers are returned unchanged.
fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Serialize a value that may point into `arena`.
pub fn serialize_value(value: &Value, arena: &Arena) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(&mut out, value, arena);
    out
}

/// Append the serialization of `value` to `out`.
///
/// String contents are copied byte for byte apart from the three escapes,
/// so a string cut inside a multibyte character prints exactly the bytes
/// it holds.
fn write_value(out: &mut Vec<u8>, value: &Value, arena: &Arena) {
    match value {
        Value::Number(n) => out.extend_from_slice(format_number(*n).as_bytes()),
        Value::Str(span) => {
            out.push(b'"');
            for &byte in arena.bytes(*span) {
                match byte {
                    b'"' => out.extend_from_slice(b"\\\""),
                    b'\\' => out.extend_from_slice(b"\\\\"),
                    b'\n' => out.extend_from_slice(b"\\n"),
                    _ => out.push(byte),
                }
            }
            out.push(b'"');
        }
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Closure(_) => out.extend_from_slice(b"#<procedure>"),
        Value::Primitive(_) => out.extend_from_slice(b"#<primop>"),
    }
}
