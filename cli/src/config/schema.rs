//! Configuration schema for figma-export
//!
//! `ProjectConfig` mirrors the optional `figma-export.toml` file. `ExportConfig`
//! is the fully resolved, immutable configuration a run works from.

use crate::client::DEFAULT_API_BASE;
use crate::svg::SvgOptions;
use crate::types::OutputFilter;
use serde::Deserialize;
use std::path::PathBuf;

/// Default output directory for exported files
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Contents of a project configuration file
///
/// Every key is optional; values given on the command line take precedence.
/// The access token is deliberately not part of the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub filter: Option<OutputFilter>,

    #[serde(default)]
    pub preserve_colors: Option<bool>,

    #[serde(default)]
    pub non_square: Option<bool>,

    #[serde(default)]
    pub api_base: Option<String>,

    /// Liquid template for the generated `.tsx` wrappers
    #[serde(default)]
    pub component_template: Option<PathBuf>,

    /// Liquid template for each line of `index.ts`
    #[serde(default)]
    pub export_template: Option<PathBuf>,
}

/// Resolved configuration for one export run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub token: String,
    pub file_id: String,
    pub page_id: String,
    pub output_dir: PathBuf,
    pub filter: OutputFilter,
    pub preserve_colors: bool,
    pub non_square: bool,
    pub api_base: String,
}

impl ExportConfig {
    pub fn new(
        token: impl Into<String>,
        file_id: impl Into<String>,
        page_id: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            file_id: file_id.into(),
            page_id: page_id.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filter: OutputFilter::default(),
            preserve_colors: false,
            non_square: false,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            preserve_colors: self.preserve_colors,
            non_square: self.non_square,
        }
    }

    /// Validate the configuration for common errors
    ///
    /// Returns Ok(()) if valid, or Err with a list of error messages
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.token.trim().is_empty() {
            errors.push("access token cannot be empty".to_string());
        }
        if self.file_id.trim().is_empty() {
            errors.push("file id cannot be empty".to_string());
        }
        if self.page_id.trim().is_empty() {
            errors.push("page id cannot be empty".to_string());
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            errors.push(format!(
                "API base '{}' must start with http:// or https://",
                self.api_base
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::new("t", "f", "p");
        assert_eq!(config.output_dir, PathBuf::from("icons"));
        assert_eq!(config.filter, OutputFilter::Both);
        assert_eq!(config.api_base, "https://api.figma.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = ExportConfig::new(" ", "", "p");
        config.api_base = "ftp://example.com".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("token")));
        assert!(errors.iter().any(|e| e.contains("file id")));
        assert!(errors.iter().any(|e| e.contains("ftp://")));
    }

    #[test]
    fn test_parse_project_config() {
        let config: ProjectConfig = toml::from_str(
            r#"
            file = "abc123"
            page = "0:1"
            output = "src/icons"
            filter = "tsx"
            preserve_colors = true
            "#,
        )
        .unwrap();

        assert_eq!(config.file.as_deref(), Some("abc123"));
        assert_eq!(config.output, Some(PathBuf::from("src/icons")));
        assert_eq!(config.filter, Some(OutputFilter::Tsx));
        assert_eq!(config.preserve_colors, Some(true));
        assert_eq!(config.non_square, None);
    }

    #[test]
    fn test_project_config_rejects_unknown_keys() {
        let result: Result<ProjectConfig, _> = toml::from_str(r#"token = "secret""#);
        assert!(result.is_err());
    }
}
