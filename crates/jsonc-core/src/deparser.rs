//! Serializer: [`Object`] tree → compact JSON text.
//!
//! Output is canonical and compact — no whitespace between tokens, no
//! trailing commas, entries in insertion order. Numbers render through
//! `f64`'s display form, so integer-looking source text round-trips as
//! whatever the double prints as (`1.0` comes back out as `1`).

use crate::types::{Object, Value};

/// Render a tree back to compact JSON text. Total over any well-formed
/// tree; never fails.
pub fn deparse(object: &Object) -> String {
    let mut out = String::new();
    write_object(object, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Array(values) => {
            out.push('[');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(value, out);
            }
            out.push(']');
        }
        Value::Object(object) => write_object(object, out),
    }
}

fn write_object(object: &Object, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        write_value(value, out);
    }
    out.push('}');
}

/// Quote a string, escaping `"` and `\` only. The stored content is
/// already decoded, so everything else passes through byte-for-byte.
pub(crate) fn write_string(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}
