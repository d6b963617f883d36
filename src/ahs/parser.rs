//! Low-level AHS archive parser.
//!
//! This module handles the binary parsing of AHS records from an
//! in-memory buffer.
//!
//! ## Parsing Strategy
//!
//! AHS archives carry no central directory and no length fields, so
//! they must be read front to back:
//! 1. Scan the whole buffer for record magic signatures
//! 2. A record's extent is the interval between its magic and the next
//!    one (or the end of the buffer)
//! 3. The name is NUL-terminated inside a reserved window; content
//!    always begins at a fixed offset past the magic
//! 4. An embedded gzip stream is discovered by signature, not declared
//!    by the header

use std::sync::Arc;

use super::error::AhsError;
use super::structures::*;

/// Low-level AHS record parser.
///
/// Holds a shared reference to the archive buffer; parsed records store
/// offsets into it rather than copies.
///
/// ## Usage
///
/// Typically used through [`AhsExtractor`](super::AhsExtractor) rather
/// than directly.
pub struct AhsParser {
    /// The shared archive contents
    buffer: Arc<[u8]>,
}

impl AhsParser {
    /// Create a new parser over the given archive buffer.
    pub fn new(buffer: Arc<[u8]>) -> Self {
        Self { buffer }
    }

    /// Find every occurrence of the record magic, in buffer order.
    ///
    /// Matches are non-overlapping: each search resumes at the end of
    /// the previous match. An archive without a single magic yields an
    /// empty vector, which is not an error.
    pub fn scan_magic(&self) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut from = 0;

        while let Some(position) = find_signature(&self.buffer, MAGIC, from) {
            offsets.push(position);
            from = position + MAGIC.len();
        }

        offsets
    }

    /// Parse every record in the archive, in buffer order.
    ///
    /// Each magic occurrence produces one outcome. A record whose name
    /// field is malformed becomes an `Err` entry without affecting its
    /// neighbors; callers collect these into a run-level report.
    pub fn list_records(&self) -> Vec<Result<AhsRecord, AhsError>> {
        let offsets = self.scan_magic();

        let mut records = Vec::with_capacity(offsets.len());
        for (i, &record_start) in offsets.iter().enumerate() {
            let next_start = offsets.get(i + 1).copied().unwrap_or(self.buffer.len());
            records.push(self.parse_record(record_start, next_start));
        }

        records
    }

    /// Parse a single record from its magic offset and its successor's.
    ///
    /// `next_start` is the offset of the next record's magic, or the
    /// buffer length for the last record.
    ///
    /// # Errors
    ///
    /// Returns an error if the name field runs past the end of the
    /// buffer without a NUL terminator, or if the name bytes are not
    /// valid UTF-8. Both are conditions of this record only.
    pub fn parse_record(
        &self,
        record_start: usize,
        next_start: usize,
    ) -> Result<AhsRecord, AhsError> {
        // The name field begins past the magic and the opaque header.
        let name_start = record_start + MAGIC.len() + HEADER_SIZE;

        let terminator = self
            .buffer
            .get(name_start..)
            .and_then(|window| window.iter().position(|&b| b == 0))
            .ok_or(AhsError::UnterminatedName {
                offset: record_start,
            })?;
        let name_end = name_start + terminator;

        let name = std::str::from_utf8(&self.buffer[name_start..name_end])
            .map_err(|source| AhsError::NameDecode {
                offset: record_start,
                source,
            })?
            .to_string();

        // Content always begins at the fixed offset, independent of the
        // decoded name's length. A record truncated before that offset
        // gets an empty range.
        let content_start = (record_start + CONTENT_OFFSET).min(next_start);

        // The first gzip signature between the name terminator and the
        // next record decides the compression kind. Whether the stream
        // is actually well-formed is checked at extraction time.
        let compression =
            match find_signature(&self.buffer[..next_start], GZIP_SIGNATURE, name_end + 1) {
                Some(position) => Compression::Gzip {
                    signature_offset: position,
                },
                None => Compression::None,
            };

        Ok(AhsRecord {
            name,
            offset: record_start,
            compression,
            content_range: content_start..next_start,
        })
    }

    /// Get a reference to the underlying buffer.
    pub fn buffer(&self) -> &Arc<[u8]> {
        &self.buffer
    }
}

/// Find the first occurrence of `signature` in `haystack` at or after
/// `from`.
fn find_signature(haystack: &[u8], signature: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }

    haystack[from..]
        .windows(signature.len())
        .position(|window| window == signature)
        .map(|position| from + position)
}
