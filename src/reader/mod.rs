//! Reading configuration files from disk with format auto-detection.

use std::path::Path;

use tracing::debug;

use crate::decode::{Diagnostic, Format, Mapping};
use crate::error::{StrataError, StrataResult};

#[cfg(test)]
mod tests;

/// Read a configuration file and return its decoded [`Mapping`].
///
/// When `format` names one of the recognised identifiers (`"json"` or
/// `"configobj"`), only that decoder runs and its diagnostics are surfaced.
/// When `format` is `None`, decoders are tried in [`Format::DETECTION_ORDER`]
/// and the first successful decode wins.
///
/// The file is read fully into memory once; each detection attempt decodes an
/// independent view of that content, and the handle is closed before this
/// function returns on every path.
///
/// # Errors
///
/// - [`StrataError::InvalidArgument`] when `format` is unrecognised; no file
///   I/O is attempted and no decoder runs.
/// - [`StrataError::FileAccess`] when `path` cannot be opened for reading.
/// - [`StrataError::Decode`] when the requested decoder rejects the content
///   (with the parser's message and line where derivable), or when no decoder
///   accepts it during auto-detection (path only, no per-decoder diagnostics).
pub fn read_file(path: impl AsRef<Path>, format: Option<&str>) -> StrataResult<Mapping> {
    let path = path.as_ref();
    // Validate the identifier before touching the file system.
    let format = format.map(str::parse::<Format>).transpose()?;
    let text =
        std::fs::read_to_string(path).map_err(|source| StrataError::file_access(path, source))?;
    decode_str(&text, path, format)
}

/// Decode already-read text, selecting or detecting the format.
///
/// `path` is carried only for error reporting; this function performs no I/O.
pub(crate) fn decode_str(
    text: &str,
    path: &Path,
    format: Option<Format>,
) -> StrataResult<Mapping> {
    match format {
        Some(requested) => requested
            .decode(text)
            .map_err(|diagnostic| decode_error(path, requested, &diagnostic)),
        None => detect(text, path),
    }
}

/// Try every decoder in order and accept the first success.
fn detect(text: &str, path: &Path) -> StrataResult<Mapping> {
    for format in Format::DETECTION_ORDER {
        match format.decode(text) {
            Ok(mapping) => {
                debug!(path = %path.display(), %format, "detected configuration format");
                return Ok(mapping);
            }
            Err(diagnostic) => {
                debug!(
                    path = %path.display(),
                    %format,
                    message = %diagnostic.message,
                    "decoder rejected content during detection"
                );
            }
        }
    }
    Err(StrataError::decode(
        path,
        "unable to decode configuration in any supported format",
    ))
}

fn decode_error(path: &Path, format: Format, diagnostic: &Diagnostic) -> StrataError {
    StrataError::Decode {
        path: path.to_path_buf(),
        message: format.failure_message().to_owned(),
        parser_msg: Some(diagnostic.render()),
        line: diagnostic.line,
    }
}
