//! # unahs
//!
//! A Rust analysis and extraction utility for HPE Active Health System
//! (.ahs) archives.
//!
//! This library parses the proprietary AHS container format: a
//! concatenation of variable-length records with no length fields. Each
//! record starts with a 4-byte magic signature, carries a 16-byte
//! opaque header and a NUL-terminated name inside a reserved window,
//! and its content runs to the next magic occurrence (or end of file).
//! Content may embed a gzip-wrapped deflate stream, discovered by
//! signature position rather than declared by the header.
//!
//! ## Features
//!
//! - Scan an in-memory archive for record boundaries
//! - Decode record names, compression kinds, and content ranges
//! - Extract raw or gzip-wrapped record payloads
//! - Normalize vendor naming quirks into usable output filenames
//! - Per-record error reporting: one bad record never aborts the run
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use unahs::AhsExtractor;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load the whole archive; the format cannot be read piecewise
//!     let buffer: Arc<[u8]> = tokio::fs::read("dump.ahs").await?.into();
//!
//!     let extractor = AhsExtractor::new(buffer);
//!
//!     // List every record that parsed cleanly
//!     for record in extractor.list_records().into_iter().flatten() {
//!         println!("{}", record.output_name());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod ahs;
pub mod cli;
pub mod io;

pub use ahs::{AhsError, AhsExtractor, AhsParser, AhsRecord, Compression, normalize_name};
pub use cli::Cli;
pub use io::{OutputWriter, read_source};
