//! Configuration file loading

use super::schema::ProjectConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "figma-export.toml";

/// Load the project configuration
///
/// An explicit `path` must exist. Without one, `figma-export.toml` in the
/// current directory is used when present, otherwise an empty config.
/// Relative template paths are resolved against the file's directory.
pub fn load_project_config(path: Option<&Path>) -> Result<ProjectConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(ProjectConfig::default());
            }
            default
        }
    };

    let content =
        fs::read_to_string(&path).context(format!("Failed to read config: {}", path.display()))?;

    let mut config: ProjectConfig =
        toml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))?;

    let base = path.parent().unwrap_or(Path::new(""));
    config.component_template = config.component_template.map(|p| base.join(p));
    config.export_template = config.export_template.map(|p| base.join(p));

    tracing::debug!("Loaded project config from {}", path.display());
    Ok(config)
}
