use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Read an entire archive into memory.
///
/// The AHS format has no central directory and no length fields, so
/// records can only be located by scanning the whole buffer; partial
/// reads buy nothing here.
pub async fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .await
        .with_context(|| format!("cannot read source file: {}", path.display()))
}
