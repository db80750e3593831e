//! Format identifiers and the decoders they dispatch to.

mod json;
mod sectioned;

use std::fmt;
use std::str::FromStr;

use crate::StrataError;


/// Universal decoded representation: a string-keyed associative structure
/// whose values are scalars or nested mappings. Both decoders produce it.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// A configuration file format the library can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Format {
    /// Hierarchical JSON text whose top level is (coercible to) an object.
    Json,
    /// INI-style text of `[section]` headers and `key=value` lines.
    Sectioned,
}

impl Format {
    /// Order in which decoders are attempted when no format is requested.
    ///
    /// JSON is tried first; the sectioned dialect accepts a wider range of
    /// line-oriented text and acts as the fallback.
    pub const DETECTION_ORDER: [Self; 2] = [Self::Json, Self::Sectioned];

    /// Decode `text` with this format's parser.
    pub(crate) fn decode(self, text: &str) -> Result<Mapping, Diagnostic> {
        match self {
            Self::Json => json::decode(text),
            Self::Sectioned => sectioned::decode(text),
        }
    }

    /// Human message used when this format's decoder rejects a file.
    pub(crate) const fn failure_message(self) -> &'static str {
        match self {
            Self::Json => "unable to decode JSON configuration",
            Self::Sectioned => "unable to decode sectioned configuration",
        }
    }
}

impl FromStr for Format {
    type Err = StrataError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        match identifier {
            "json" => Ok(Self::Json),
            "configobj" => Ok(Self::Sectioned),
            other => Err(StrataError::invalid_argument(format!(
                "unknown configuration format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identifier = match self {
            Self::Json => "json",
            Self::Sectioned => "configobj",
        };
        f.write_str(identifier)
    }
}

/// Structured description of a syntax problem reported by a decoder.
///
/// Decoders fail only through this type; they never perform I/O and never
/// panic. Position fields are filled in as far as the underlying parser can
/// derive them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Diagnostic {
    /// Parser-level description of the problem.
    pub message: String,
    /// 1-based line of the problem.
    pub line: Option<usize>,
    /// 1-based column of the problem.
    pub column: Option<usize>,
    /// Absolute character offset of the problem within the text.
    pub offset: Option<usize>,
}

impl Diagnostic {
    pub(crate) fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
            offset: None,
        }
    }

    pub(crate) fn at_line(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            column: None,
            offset: None,
        }
    }

    /// Compose the parser sub-message reported to callers.
    pub(crate) fn render(&self) -> String {
        match (self.line, self.column, self.offset) {
            (Some(line), Some(column), Some(offset)) => {
                format!(
                    "{}: line {line} column {column} (char {offset})",
                    self.message
                )
            }
            (Some(line), _, _) => format!("{}: line {line}", self.message),
            _ => self.message.clone(),
        }
    }
}
