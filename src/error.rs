//! Error types produced by the configuration loader.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenient alias for results carrying a [`StrataError`].
///
/// The library is single-threaded and never shares an error between owners,
/// so the alias carries the error directly rather than behind a pointer.
pub type StrataResult<T> = Result<T, StrataError>;

/// Errors that can occur while loading or merging configuration.
///
/// Every failure of a decoder or the reader propagates unchanged to the
/// caller; the library performs no internal recovery beyond the format
/// auto-detection fallback chain and never retries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrataError {
    /// The configuration file could not be opened for reading.
    #[error("configuration file '{path}' cannot be opened: {source}")]
    FileAccess {
        /// Path that could not be opened.
        path: PathBuf,
        /// Operating-system error reported for the open or read.
        #[source]
        source: std::io::Error,
    },

    /// The file's content could not be interpreted under the requested or
    /// any auto-detected format.
    #[error("{message} in '{path}'{}", render_parser_msg(.parser_msg))]
    Decode {
        /// Path whose content failed to decode.
        path: PathBuf,
        /// Human-readable description of the failure.
        message: String,
        /// Composed message from the parser that rejected the content, when
        /// one format was singled out.
        parser_msg: Option<String>,
        /// 1-based line of the syntax problem, when the parser reported one.
        line: Option<usize>,
    },

    /// The caller supplied an argument the library does not accept, such as
    /// an unrecognised format identifier or an empty merge input.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },
}

fn render_parser_msg(parser_msg: &Option<String>) -> String {
    parser_msg
        .as_ref()
        .map_or_else(String::new, |msg| format!("\n{msg}"))
}

impl StrataError {
    /// Construct a [`StrataError::FileAccess`] for a configuration path.
    #[must_use]
    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Construct a [`StrataError::Decode`] with no parser diagnostics.
    #[must_use]
    pub fn decode(path: &Path, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            message: message.into(),
            parser_msg: None,
            line: None,
        }
    }

    /// Construct a [`StrataError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
