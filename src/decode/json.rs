//! Decoder for hierarchical JSON configuration text.

use serde_json::Value;

use super::{Diagnostic, Mapping};

/// Decode JSON text into a [`Mapping`].
///
/// A top-level object is returned directly. A non-object top-level value is
/// accepted only when it is coercible to a mapping, which for JSON means an
/// array of `[key, value]` pairs with string keys; anything else is a decode
/// failure. Syntax errors carry the parser's message together with the line,
/// column and absolute character offset of the problem.
pub(super) fn decode(text: &str) -> Result<Mapping, Diagnostic> {
    let value: Value = serde_json::from_str(text).map_err(|err| syntax_diagnostic(&err, text))?;
    coerce_to_mapping(value)
        .ok_or_else(|| Diagnostic::message_only("top-level JSON value is not a mapping"))
}

/// Interpret a decoded value as a mapping where possible.
///
/// Mirrors the leniency of dictionary construction from an iterable of
/// pairs: `[["a", 1], ["b", 2]]` decodes to the same mapping as
/// `{"a": 1, "b": 2}`, with later pairs overwriting earlier duplicates.
fn coerce_to_mapping(value: Value) -> Option<Mapping> {
    match value {
        Value::Object(map) => Some(map),
        Value::Array(pairs) => {
            let mut map = Mapping::new();
            for pair in pairs {
                let Value::Array(entry) = pair else {
                    return None;
                };
                let mut entry = entry.into_iter();
                let (Some(Value::String(key)), Some(item), None) =
                    (entry.next(), entry.next(), entry.next())
                else {
                    return None;
                };
                map.insert(key, item);
            }
            Some(map)
        }
        _ => None,
    }
}

fn syntax_diagnostic(err: &serde_json::Error, text: &str) -> Diagnostic {
    // serde_json reports 1-based positions; zero means no position is known.
    let line = (err.line() > 0).then_some(err.line());
    let column = (err.column() > 0).then_some(err.column());
    let offset = match (line, column) {
        (Some(l), Some(c)) => char_offset(text, l, c),
        _ => None,
    };
    Diagnostic {
        message: strip_position_suffix(&err.to_string()),
        line,
        column,
        offset,
    }
}

/// Drop the parser's own ` at line L column C` suffix; the diagnostic
/// re-composes positions in its rendered form.
fn strip_position_suffix(message: &str) -> String {
    message.split(" at line ").next().unwrap_or(message).to_owned()
}

/// Absolute character offset of a 1-based line/column position in `text`.
fn char_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    let mut offset = 0usize;
    for (index, content) in text.split('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1));
        }
        // +1 for the newline consumed by the split
        offset += content.chars().count() + 1;
    }
    None
}
