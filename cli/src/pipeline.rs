//! Export orchestration
//!
//! A run moves through fixed stages:
//!
//! ```text
//! fetch tree → locate page → extract components → fetch image URLs
//!   → per component: fetch source → optimize → write files (concurrent)
//!   → write index
//! ```
//!
//! The first error aborts the run. Files written before the failure stay on
//! disk.

use crate::client::DesignApi;
use crate::codegen::{Templates, generate_component, generate_index};
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::extract::{Component, ComponentMap, extract_components};
use crate::locate::find_page;
use crate::observer::{ExportEvent, ExportObserver, Stage, TracingObserver};
use crate::svg;
use crate::writer::{component_path, write_file, write_index};
use futures_util::future;
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug)]
pub struct ExportSummary {
    pub components: ComponentMap,
    /// Every file written, component files in extraction order, index last
    pub files: Vec<PathBuf>,
    pub index: Option<PathBuf>,
}

pub struct Exporter<A> {
    api: A,
    config: ExportConfig,
    templates: Templates,
    observer: Box<dyn ExportObserver>,
}

impl<A: DesignApi> Exporter<A> {
    pub fn new(api: A, config: ExportConfig, templates: Templates) -> Self {
        Self {
            api,
            config,
            templates,
            observer: Box::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl ExportObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Fetch and extract the page's components without writing anything
    pub async fn list(&self) -> Result<ComponentMap> {
        let mut stage = Stage::FetchingTree;
        let result = self.components(&mut stage).await;
        if let Err(error) = &result {
            self.observer.notify(&ExportEvent::Failed { stage, error });
        }
        result
    }

    /// Run the full export
    pub async fn run(&self) -> Result<ExportSummary> {
        let mut stage = Stage::FetchingTree;
        let result = self.execute(&mut stage).await;
        match &result {
            Ok(summary) => self.observer.notify(&ExportEvent::Finished {
                components: summary.components.len(),
                files: summary.files.len(),
            }),
            Err(error) => self.observer.notify(&ExportEvent::Failed { stage, error }),
        }
        result
    }

    fn enter(&self, stage: &mut Stage, next: Stage) {
        *stage = next;
        self.observer.notify(&ExportEvent::StageStarted(next));
    }

    async fn components(&self, stage: &mut Stage) -> Result<ComponentMap> {
        self.enter(stage, Stage::FetchingTree);
        let root = self
            .api
            .fetch_tree(&self.config.file_id, &self.config.page_id)
            .await?;

        self.enter(stage, Stage::LocatingPage);
        let page = find_page(&root.children, &self.config.page_id)?;
        self.observer.notify(&ExportEvent::PageLocated {
            id: &page.id,
            name: &page.name,
        });

        self.enter(stage, Stage::ExtractingComponents);
        let components = extract_components(page)?;
        self.observer.notify(&ExportEvent::ComponentsExtracted {
            count: components.len(),
        });

        Ok(components)
    }

    async fn execute(&self, stage: &mut Stage) -> Result<ExportSummary> {
        let components = self.components(stage).await?;
        if components.is_empty() {
            return Ok(ExportSummary {
                components,
                files: Vec::new(),
                index: None,
            });
        }

        self.enter(stage, Stage::FetchingImageUrls);
        let ids: Vec<&str> = components.ids().collect();
        let urls = self
            .api
            .fetch_image_urls(&ids, &self.config.file_id)
            .await?;

        // Every component needs a URL before anything is downloaded
        let jobs = components
            .iter()
            .map(|component| match urls.get(&component.id) {
                Some(url) => Ok((component, url.as_str())),
                None => Err(ExportError::MissingImageUrl {
                    id: component.id.clone(),
                    name: component.name.clone(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        self.enter(stage, Stage::ExportingComponents);
        let written = future::try_join_all(
            jobs.into_iter()
                .map(|(component, url)| self.export_component(component, url)),
        )
        .await?;
        let mut files: Vec<PathBuf> = written.into_iter().flatten().collect();

        let index = if self.config.filter.writes_wrappers() {
            self.enter(stage, Stage::WritingIndex);
            let content = generate_index(&components, self.templates.export.as_ref())?;
            let path = write_index(&self.config.output_dir, &content).await?;
            files.push(path.clone());
            Some(path)
        } else {
            None
        };

        Ok(ExportSummary {
            components,
            files,
            index,
        })
    }

    async fn export_component(&self, component: &Component, url: &str) -> Result<Vec<PathBuf>> {
        let raw = self.api.fetch_raw_source(url).await?;
        let relative = component.path();
        let svg = svg::optimize(&raw, self.config.svg_options(), &relative)?;

        let mut files = Vec::with_capacity(2);
        if self.config.filter.writes_svg() {
            let path = component_path(&self.config.output_dir, &relative, "svg");
            write_file(&path, &svg).await?;
            files.push(path);
        }
        if self.config.filter.writes_wrappers() {
            let source = generate_component(&svg, component, self.templates.component.as_ref())?;
            let path = component_path(&self.config.output_dir, &relative, "tsx");
            write_file(&path, &source).await?;
            files.push(path);
        }

        self.observer.notify(&ExportEvent::ComponentExported {
            component,
            files: &files,
        });
        Ok(files)
    }
}
