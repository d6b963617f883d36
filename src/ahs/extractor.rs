use std::io::Read;
use std::sync::Arc;

use flate2::read::GzDecoder;

use super::error::AhsError;
use super::parser::AhsParser;
use super::structures::{AhsRecord, Compression};

/// AHS record extractor.
///
/// Extraction is a pure transform from a parsed record to its payload
/// bytes; persisting payloads is the job of
/// [`OutputWriter`](crate::io::OutputWriter).
pub struct AhsExtractor {
    parser: AhsParser,
}

impl AhsExtractor {
    pub fn new(buffer: Arc<[u8]>) -> Self {
        Self {
            parser: AhsParser::new(buffer),
        }
    }

    /// Parse all records in the archive, in buffer order.
    pub fn list_records(&self) -> Vec<Result<AhsRecord, AhsError>> {
        self.parser.list_records()
    }

    /// Extract a record's logical payload to memory.
    ///
    /// Raw records are copied byte-for-byte from the content region,
    /// trailing padding included. Gzip records are decompressed from
    /// the discovered signature offset; any bytes between the fixed
    /// content start and the signature are header padding, not payload.
    ///
    /// # Errors
    ///
    /// Returns [`AhsError::Decompression`] when the embedded gzip
    /// stream is corrupt or truncated. The failure belongs to this
    /// record alone; other records extract independently.
    pub fn extract_to_memory(&self, record: &AhsRecord) -> Result<Vec<u8>, AhsError> {
        let buffer = self.parser.buffer();

        match record.compression {
            Compression::None => Ok(buffer[record.content_range.clone()].to_vec()),
            Compression::Gzip { signature_offset } => {
                let stream = &buffer[signature_offset..record.content_range.end];

                let mut decoder = GzDecoder::new(stream);
                let mut payload = Vec::new();
                decoder
                    .read_to_end(&mut payload)
                    .map_err(|source| AhsError::Decompression {
                        name: record.name.clone(),
                        source,
                    })?;

                Ok(payload)
            }
        }
    }
}
