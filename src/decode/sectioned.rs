//! Decoder for INI-style sectioned configuration text.

use serde_json::Value;

use super::{Diagnostic, Mapping};

/// Decode sectioned text into a [`Mapping`] of section name to entries.
///
/// The dialect is the conventional desktop one: `[section]` headers followed
/// by `key=value` (or `key: value`) lines, with blank lines and `#`/`;`
/// comment lines ignored. Keys are trimmed and lowercased, values trimmed.
/// No interpolation and no multi-line values. Duplicate sections, duplicate
/// keys within a section, entries before any header, and lines that fit no
/// rule are decode failures carrying the offending 1-based line.
///
/// Text with no content lines at all decodes to an empty mapping.
pub(super) fn decode(text: &str) -> Result<Mapping, Diagnostic> {
    let mut sections = Mapping::new();
    let mut current: Option<(String, Mapping)> = None;

    for (index, raw) in text.lines().enumerate() {
        let lineno = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = header_name(line) {
            if name.is_empty() {
                return Err(Diagnostic::at_line("empty section name", lineno));
            }
            if let Some((done, entries)) = current.take() {
                sections.insert(done, Value::Object(entries));
            }
            if sections.contains_key(name) {
                return Err(Diagnostic::at_line(
                    format!("duplicate section '{name}'"),
                    lineno,
                ));
            }
            current = Some((name.to_owned(), Mapping::new()));
            continue;
        }
        let Some((key, value)) = split_entry(line) else {
            return Err(Diagnostic::at_line(
                "line is neither a section header nor a key/value entry",
                lineno,
            ));
        };
        let Some((_, entries)) = current.as_mut() else {
            return Err(Diagnostic::at_line(
                "key/value entry before any section header",
                lineno,
            ));
        };
        if key.is_empty() {
            return Err(Diagnostic::at_line("entry with an empty key", lineno));
        }
        if entries.contains_key(&key) {
            return Err(Diagnostic::at_line(
                format!("duplicate key '{key}'"),
                lineno,
            ));
        }
        entries.insert(key, Value::String(value));
    }

    if let Some((done, entries)) = current.take() {
        // Reinsertion cannot collide: the duplicate check ran on the header.
        sections.insert(done, Value::Object(entries));
    }
    Ok(sections)
}

fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Split a content line at its first `=` or `:` delimiter.
///
/// The key is trimmed and lowercased; the value is trimmed.
fn split_entry(line: &str) -> Option<(String, String)> {
    let delimiter = match (line.find('='), line.find(':')) {
        (Some(eq), Some(colon)) if colon < eq => ':',
        (Some(_), _) => '=',
        (None, Some(_)) => ':',
        (None, None) => return None,
    };
    let (key, value) = line.split_once(delimiter)?;
    Some((key.trim().to_lowercase(), value.trim().to_owned()))
}
