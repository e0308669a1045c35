// Use modules from the library crate
use figma_export::codegen::Templates;
use figma_export::config::{self, Overrides, Settings};
use figma_export::observer::ConsoleObserver;
use figma_export::{Exporter, FigmaClient, OutputFilter, logging};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "figma-export",
    about = "Export Figma components as optimized SVG files and React wrappers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Export every component of a page
    ///
    /// Components grouped in a component set are written to a subfolder named
    /// after the set. With wrapper generation enabled, an index.ts re-exporting
    /// every component is written to the output directory.
    ///
    /// Examples:
    ///   figma-export export --file AbC123 --page 0:1
    ///   figma-export export --page Icons --filter svg -o assets/icons
    ///   figma-export export --component-template icon.liquid
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory (defaults to ./icons)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Files to generate per component
        #[arg(long, value_name = "FILTER")]
        filter: Option<OutputFilter>,

        /// Keep fill and stroke colors instead of replacing them with currentColor
        #[arg(long)]
        preserve_colors: bool,

        /// Keep width and height of non-square artwork and center it
        #[arg(long)]
        non_square: bool,

        /// Liquid template for the generated .tsx wrappers
        #[arg(long, value_name = "PATH")]
        component_template: Option<PathBuf>,

        /// Liquid template for each line of index.ts
        #[arg(long, value_name = "PATH")]
        export_template: Option<PathBuf>,
    },

    /// List the components of a page without writing anything
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Figma personal access token
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// File key (the id in the file's URL)
    #[arg(long, env = "FIGMA_FILE")]
    file: Option<String>,

    /// Page id (e.g. 0:1) or page name
    #[arg(long, env = "FIGMA_PAGE")]
    page: Option<String>,

    /// API endpoint
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Project config file (defaults to ./figma-export.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl SourceArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            token: self.token.clone(),
            file: self.file.clone(),
            page: self.page.clone(),
            api_base: self.api_base.clone(),
            ..Default::default()
        }
    }
}

fn build_exporter(settings: &Settings) -> Result<Exporter<FigmaClient>> {
    let templates = Templates::load(
        settings.component_template.as_deref(),
        settings.export_template.as_deref(),
    )
    .context("Failed to load templates")?;

    let client = FigmaClient::new(&settings.export.api_base, &settings.export.token);
    Ok(Exporter::new(client, settings.export.clone(), templates).with_observer(ConsoleObserver))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export {
            source,
            output,
            filter,
            preserve_colors,
            non_square,
            component_template,
            export_template,
        } => {
            logging::init(source.verbose)?;

            let project = config::load_project_config(source.config.as_deref())?;
            let overrides = Overrides {
                output,
                filter,
                preserve_colors,
                non_square,
                component_template,
                export_template,
                ..source.overrides()
            };
            let settings = config::resolve(overrides, project)?;

            let exporter = build_exporter(&settings)?;
            let summary = exporter.run().await.context("Export failed")?;

            if summary.components.is_empty() {
                println!("No components found on page '{}'", settings.export.page_id);
            } else {
                println!("\nOutput: {}", settings.export.output_dir.display());
            }
        }

        Command::List { source } => {
            logging::init(source.verbose)?;

            let project = config::load_project_config(source.config.as_deref())?;
            let settings = config::resolve(source.overrides(), project)?;

            let exporter = build_exporter(&settings)?;
            let components = exporter.list().await.context("Failed to list components")?;

            println!();
            for component in &components {
                println!("{:<16} {}", component.id, component.path());
            }
            println!("\n{} components", components.len());
        }
    }

    Ok(())
}
