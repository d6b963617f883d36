//! Error types for AHS record parsing and extraction.

use thiserror::Error;

/// Errors that can occur while parsing or extracting AHS records.
///
/// Every variant is a per-record condition: the surrounding scan keeps
/// going, and callers aggregate these into a run-level report.
#[derive(Debug, Error)]
pub enum AhsError {
    /// Record name bytes are not valid UTF-8.
    #[error("record at offset {offset:#x}: name is not valid UTF-8")]
    NameDecode {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The buffer ended before the name's NUL terminator was found.
    #[error("record at offset {offset:#x}: name field is not NUL-terminated")]
    UnterminatedName { offset: usize },

    /// Embedded gzip stream is corrupt or truncated.
    #[error("{name}: {source}")]
    Decompression {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl AhsError {
    /// Name of the record the error belongs to, when one was decoded
    /// before the failure.
    pub fn record_name(&self) -> Option<&str> {
        match self {
            AhsError::Decompression { name, .. } => Some(name),
            _ => None,
        }
    }
}
