//! Directory path management for figma-export

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the log directory path using XDG conventions
///
/// - `$XDG_DATA_HOME/figma-export/logs` on Linux
/// - `~/Library/Application Support/figma-export/logs` on macOS
/// - `{FOLDERID_LocalAppData}/figma-export/logs` on Windows
pub fn get_log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Failed to determine data directory (XDG_DATA_HOME or platform equivalent)")?;

    Ok(data_dir.join("figma-export").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_dir() {
        let log_dir = get_log_dir().expect("Should get log dir");
        assert!(log_dir.ends_with("figma-export/logs"));
    }
}
