//! Depth-bounded dump of JSON values.
//!
//! The output is meant for a `<pre>` block: one entry per line, two spaces of
//! indentation per level, strings and keys HTML-escaped. Containers nested
//! deeper than the limit collapse to a one-line summary with their length.
//!
//! ```
//! use micro_inspect::dump;
//!
//! let value: serde_json::Value = serde_json::from_str(r#"{"tags": ["a", "b"], "id": 7}"#).unwrap();
//! assert_eq!(
//!     dump::dump(&value, 4),
//!     "object {\n  \"tags\": array:2 [\n    0 => \"a\"\n    1 => \"b\"\n  ]\n  \"id\": 7\n}"
//! );
//! assert_eq!(dump::dump(&value, 1), "object {\n  \"tags\": array:2 [ … ]\n  \"id\": 7\n}");
//! ```

use serde_json::Value;

use crate::text::escape;

const INDENT: &str = "  ";

/// Dumps `value`, collapsing containers nested `max_depth` levels deep. The
/// top-level value sits at depth 0 and keys keep their document order.
pub fn dump(value: &Value, max_depth: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, max_depth);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, max_depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) if depth >= max_depth => out.push_str(&format!("array:{} [ … ]", items.len())),
        Value::Array(items) => {
            out.push_str(&format!("array:{} [\n", items.len()));
            for (index, item) in items.iter().enumerate() {
                indent(out, depth + 1);
                out.push_str(&format!("{index} => "));
                write_value(out, item, depth + 1, max_depth);
                out.push('\n');
            }
            indent(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) if depth >= max_depth => out.push_str(&format!("object:{} {{ … }}", map.len())),
        Value::Object(map) => {
            out.push_str("object {\n");
            for (key, item) in map {
                indent(out, depth + 1);
                write_string(out, key);
                out.push_str(": ");
                write_value(out, item, depth + 1, max_depth);
                out.push('\n');
            }
            indent(out, depth);
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    out.push_str(&escape(s));
    out.push('"');
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
