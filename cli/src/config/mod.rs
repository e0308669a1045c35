//! Configuration management for figma-export
//!
//! Settings come from three layers, highest priority first:
//!
//! - command-line flags (and their environment variables)
//! - the project file `figma-export.toml`
//! - built-in defaults
//!
//! ## Architecture
//!
//! - `schema` - Configuration data structures
//! - `io` - Reading the project file
//! - `paths` - Directory path management

pub mod io;
pub mod paths;
pub mod schema;

pub use io::{DEFAULT_CONFIG_FILE, load_project_config};
pub use paths::get_log_dir;
pub use schema::{DEFAULT_OUTPUT_DIR, ExportConfig, ProjectConfig};

use crate::types::OutputFilter;
use anyhow::Result;
use std::path::PathBuf;

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub file: Option<String>,
    pub page: Option<String>,
    pub output: Option<PathBuf>,
    pub filter: Option<OutputFilter>,
    pub preserve_colors: bool,
    pub non_square: bool,
    pub api_base: Option<String>,
    pub component_template: Option<PathBuf>,
    pub export_template: Option<PathBuf>,
}

/// Fully resolved settings for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub export: ExportConfig,
    pub component_template: Option<PathBuf>,
    pub export_template: Option<PathBuf>,
}

/// Merge command-line values over the project file and validate the result
pub fn resolve(overrides: Overrides, project: ProjectConfig) -> Result<Settings> {
    let Some(token) = overrides.token else {
        anyhow::bail!("missing access token: pass --token or set FIGMA_TOKEN");
    };
    let Some(file) = overrides.file.or(project.file) else {
        anyhow::bail!("missing file id: pass --file, set FIGMA_FILE or add `file` to the config");
    };
    let Some(page) = overrides.page.or(project.page) else {
        anyhow::bail!("missing page id: pass --page, set FIGMA_PAGE or add `page` to the config");
    };

    let mut export = ExportConfig::new(token, file, page);
    if let Some(output) = overrides.output.or(project.output) {
        export.output_dir = output;
    }
    if let Some(filter) = overrides.filter.or(project.filter) {
        export.filter = filter;
    }
    if let Some(api_base) = overrides.api_base.or(project.api_base) {
        export.api_base = api_base;
    }
    export.preserve_colors = overrides.preserve_colors || project.preserve_colors.unwrap_or(false);
    export.non_square = overrides.non_square || project.non_square.unwrap_or(false);

    if let Err(errors) = export.validate() {
        anyhow::bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(Settings {
        export,
        component_template: overrides.component_template.or(project.component_template),
        export_template: overrides.export_template.or(project.export_template),
    })
}
