//! Progress reporting for export runs

use crate::error::ExportError;
use crate::extract::Component;
use std::path::PathBuf;
use tracing::{error, info};

/// Pipeline stages, in the order a run moves through them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchingTree,
    LocatingPage,
    ExtractingComponents,
    FetchingImageUrls,
    ExportingComponents,
    WritingIndex,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::FetchingTree => write!(f, "fetching document tree"),
            Stage::LocatingPage => write!(f, "locating page"),
            Stage::ExtractingComponents => write!(f, "extracting components"),
            Stage::FetchingImageUrls => write!(f, "fetching image URLs"),
            Stage::ExportingComponents => write!(f, "exporting components"),
            Stage::WritingIndex => write!(f, "writing index"),
        }
    }
}

#[derive(Debug)]
pub enum ExportEvent<'a> {
    StageStarted(Stage),
    PageLocated { id: &'a str, name: &'a str },
    ComponentsExtracted { count: usize },
    ComponentExported {
        component: &'a Component,
        files: &'a [PathBuf],
    },
    Finished { components: usize, files: usize },
    Failed { stage: Stage, error: &'a ExportError },
}

/// Receives pipeline events as a run progresses
pub trait ExportObserver {
    fn notify(&self, event: &ExportEvent<'_>);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExportObserver for TracingObserver {
    fn notify(&self, event: &ExportEvent<'_>) {
        match event {
            ExportEvent::StageStarted(stage) => info!(%stage, "Stage started"),
            ExportEvent::PageLocated { id, name } => info!(%id, %name, "Page located"),
            ExportEvent::ComponentsExtracted { count } => info!(count, "Components extracted"),
            ExportEvent::ComponentExported { component, files } => {
                info!(id = %component.id, path = %component.path(), files = files.len(), "Component exported")
            }
            ExportEvent::Finished { components, files } => {
                info!(components, files, "Export finished")
            }
            ExportEvent::Failed { stage, error } => error!(%stage, %error, "Export failed"),
        }
    }
}

/// Prints progress lines for the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl ExportObserver for ConsoleObserver {
    fn notify(&self, event: &ExportEvent<'_>) {
        match event {
            ExportEvent::StageStarted(Stage::FetchingTree) => println!("📄 Fetching document tree..."),
            ExportEvent::StageStarted(Stage::FetchingImageUrls) => {
                println!("🔗 Fetching image URLs...")
            }
            ExportEvent::StageStarted(Stage::ExportingComponents) => {
                println!("📦 Exporting components...")
            }
            ExportEvent::StageStarted(Stage::WritingIndex) => println!("📝 Writing index..."),
            ExportEvent::StageStarted(_) => {}
            ExportEvent::PageLocated { id, name } => println!("   Page: {} ({})", name, id),
            ExportEvent::ComponentsExtracted { count } => println!("   Found {} components", count),
            ExportEvent::ComponentExported { component, .. } => {
                println!("   ✓ {}", component.path())
            }
            ExportEvent::Finished { components, files } => {
                println!("✅ Exported {} components ({} files)", components, files)
            }
            ExportEvent::Failed { stage, .. } => eprintln!("❌ Export failed while {}", stage),
        }
    }
}

/// Discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExportObserver for NoopObserver {
    fn notify(&self, _event: &ExportEvent<'_>) {}
}
