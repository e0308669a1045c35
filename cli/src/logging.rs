use crate::config::get_log_dir;
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the figma-export CLI
///
/// Diagnostics go to stderr and to a daily-rotated file in the platform data
/// directory (see [`get_log_dir`]). Progress output for users is printed
/// separately and never passes through here.
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=debug figma-export export ...  (verbose logging)
/// - RUST_LOG=warn figma-export export ...   (quiet)
pub fn init(verbose: bool) -> Result<()> {
    let log_dir = get_log_dir()?;

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "figma-export.log");

    let default_filter = if verbose {
        "figma_export=debug"
    } else {
        "figma_export=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI colors in log files
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::debug!("Logging initialized to {}", log_dir.display());

    Ok(())
}
