//! Human-readable rendering for debugging and test output.
//!
//! Unlike [`deparse`](crate::deparse), this is not canonical output:
//! entries go one per line with a trailing comma, nested objects indent
//! by four spaces, and arrays stay inline. The result still re-parses to
//! an equal tree in the permissive mode (trailing commas included).

use crate::deparser::write_string;
use crate::types::{Object, Value};

/// Render a tree with indentation for human consumption.
pub fn pretty(object: &Object) -> String {
    let mut out = String::new();
    write_object(object, 0, &mut out);
    out
}

fn write_object(object: &Object, indent: usize, out: &mut String) {
    if object.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let field_indent = " ".repeat(indent + 4);
    for (key, value) in object.iter() {
        out.push_str(&field_indent);
        write_string(key, out);
        out.push_str(": ");
        write_value(value, indent + 4, out);
        out.push_str(",\n");
    }
    out.push_str(&" ".repeat(indent));
    out.push('}');
}

fn write_value(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Array(values) => {
            out.push('[');
            for value in values {
                write_value(value, indent, out);
                out.push(',');
            }
            out.push(']');
        }
        Value::Object(object) => write_object(object, indent, out),
    }
}
