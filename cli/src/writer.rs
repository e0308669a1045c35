//! Output file writing

use crate::error::{ExportError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the generated barrel file
pub const INDEX_FILE: &str = "index.ts";

/// Write `content` to `path`, creating parent directories as needed
///
/// Directory creation tolerates existing directories, so components sharing
/// a folder can be written concurrently.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ExportError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Path of a component output file: `<output>/[<folder>/]<name>.<extension>`
pub fn component_path(output_dir: &Path, relative: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", relative, extension))
}

/// Write the index file into the output directory
pub async fn write_index(output_dir: &Path, content: &str) -> Result<PathBuf> {
    let path = output_dir.join(INDEX_FILE);
    write_file(&path, content).await?;
    Ok(path)
}
