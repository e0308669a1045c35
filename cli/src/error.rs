use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Request to {url} failed with status {status}")]
    RemoteFetch { url: String, status: String },

    #[error("Figma API reported an error: {0}")]
    RemoteApi(String),

    #[error("Page '{0}' not found in document")]
    PageNotFound(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No rendered image URL returned for component '{name}' ({id})")]
    MissingImageUrl { id: String, name: String },

    #[error("Components {first} and {second} both export to '{path}'")]
    DuplicateName {
        /// Output path or wrapper identifier claimed twice
        path: String,
        first: String,
        second: String,
    },

    #[error("HTTP request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid SVG for {context}: {message}")]
    Svg { context: String, message: String },

    #[error("Template error: {0}")]
    Template(String),
}

impl From<liquid::Error> for ExportError {
    fn from(err: liquid::Error) -> Self {
        ExportError::Template(err.to_string())
    }
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
