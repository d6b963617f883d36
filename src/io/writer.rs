use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Writes extracted payloads under a destination directory.
///
/// The destination is created on first write. Record names in AHS
/// archives are flat, so payloads land directly inside it.
pub struct OutputWriter {
    destination: PathBuf,
}

impl OutputWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// The directory this writer persists payloads into.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Write one payload under the destination directory.
    ///
    /// Creates the destination (and any missing parents) if absent.
    /// Returns the path of the written file.
    pub async fn write(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.destination)
            .await
            .with_context(|| {
                format!("cannot create directory: {}", self.destination.display())
            })?;

        let output_path = self.destination.join(name);
        let mut file = fs::File::create(&output_path)
            .await
            .with_context(|| format!("cannot create file: {}", output_path.display()))?;
        file.write_all(data).await?;

        Ok(output_path)
    }
}
