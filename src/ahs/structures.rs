use std::ops::Range;

/// Record magic signature ("ABJR") marking the start of each record.
pub const MAGIC: &[u8] = b"ABJR";

/// Opaque header following the magic. Contains flags and other fields
/// that are not examined.
pub const HEADER_SIZE: usize = 16;

/// Reserved name/metadata window following the opaque header. The name
/// is NUL-terminated inside this window; the padding beyond the
/// terminator is unexamined.
pub const NAME_WINDOW_SIZE: usize = 100;

/// Fixed offset from a record's magic to its content region,
/// independent of the actual name length.
pub const CONTENT_OFFSET: usize = HEADER_SIZE + NAME_WINDOW_SIZE;

/// Gzip member signature: \x1F\x8B plus the deflate method byte.
pub const GZIP_SIGNATURE: &[u8] = b"\x1F\x8B\x08";

/// Compression kind of a record's content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Content is stored as-is.
    None,
    /// Content embeds a gzip stream starting at this buffer offset.
    Gzip { signature_offset: usize },
}

/// Parsed AHS record information.
///
/// A record stores offsets into the shared archive buffer, never a
/// private copy of its bytes. Payloads are materialized only by the
/// extractor.
#[derive(Debug, Clone)]
pub struct AhsRecord {
    /// Decoded record name, as stored in the archive.
    pub name: String,
    /// Offset of the record's magic in the archive buffer.
    pub offset: usize,
    /// Compression kind discovered during parsing.
    pub compression: Compression,
    /// Content region within the archive buffer, before any
    /// decompression.
    pub content_range: Range<usize>,
}

impl AhsRecord {
    /// Length of the content region in bytes (compressed size for gzip
    /// records).
    pub fn content_len(&self) -> usize {
        self.content_range.len()
    }

    /// Whether the content region embeds a gzip stream.
    pub fn is_compressed(&self) -> bool {
        matches!(self.compression, Compression::Gzip { .. })
    }

    /// Output filename for this record.
    pub fn output_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Map a record's stored name to its output filename.
///
/// Stored names carry vendor naming quirks: `.zbb` blackbox logs are
/// renamed to `.bb`, and the two known `.pkg` entries get an extension
/// matching their actual content.
pub fn normalize_name(name: &str) -> String {
    if let Some(stem) = name.strip_suffix(".zbb") {
        return format!("{}.bb", stem);
    }
    match name {
        "bcert.pkg" => format!("{}.xml", name),
        "file.pkg" => format!("{}.txt", name),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_names() {
        assert_eq!(normalize_name("archive.zbb"), "archive.bb");
        assert_eq!(normalize_name("bcert.pkg"), "bcert.pkg.xml");
        assert_eq!(normalize_name("file.pkg"), "file.pkg.txt");
    }

    #[test]
    fn test_normalize_leaves_other_names_unchanged() {
        assert_eq!(normalize_name("report.bin"), "report.bin");
        assert_eq!(normalize_name("counters.zbb.old"), "counters.zbb.old");
        assert_eq!(normalize_name("other.pkg"), "other.pkg");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_content_offset_constant() {
        // Observed across sample archives: content always begins 116
        // bytes past the record magic.
        assert_eq!(CONTENT_OFFSET, 116);
    }
}
