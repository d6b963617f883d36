//! AHS archive parsing and extraction.
//!
//! This module provides functionality for reading and extracting HPE
//! Active Health System (.ahs) diagnostic archives.
//!
//! ## Architecture
//!
//! The module is organized into four components:
//!
//! - [`structures`]: Format constants and data structures (record
//!   descriptor, compression kind, name normalization)
//! - [`parser`]: Low-level record scanning and parsing from raw bytes
//! - [`extractor`]: Pure payload extraction (raw copy or gzip
//!   decompression)
//! - [`error`]: Typed per-record error conditions
//!
//! ## AHS Format Overview
//!
//! An AHS archive is a concatenation of variable-length records:
//! 1. 4-byte magic signature (`ABJR`)
//! 2. 16-byte opaque header (flags, unexamined)
//! 3. NUL-terminated name inside a reserved 100-byte window
//! 4. Content from a fixed 116-byte offset up to the next magic
//!    occurrence (or end of file)
//!
//! There are no length fields: record boundaries are inferred from the
//! next magic occurrence, and gzip-wrapped content is discovered by the
//! position of its `1F 8B 08` signature inside the content region.
//!
//! ## Limitations
//!
//! - The whole archive must fit in memory (no length fields means no
//!   seeking past a record without scanning it)
//! - No compression schemes other than gzip-wrapped deflate
//! - No recovery of corrupted name fields

mod error;
mod extractor;
mod parser;
mod structures;

pub use error::AhsError;
pub use extractor::AhsExtractor;
pub use parser::AhsParser;
pub use structures::*;
