pub mod client;
pub mod codegen;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod locate;
pub mod logging;
pub mod observer;
pub mod pipeline;
pub mod svg;
pub mod types;
pub mod writer;

pub use client::{DesignApi, FigmaClient};
pub use error::ExportError;
pub use extract::{Component, ComponentMap};
pub use pipeline::{ExportSummary, Exporter};
pub use types::OutputFilter;
