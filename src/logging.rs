// File logging. The terminal belongs to the UI, so nothing goes to stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{AuthScreenError, Result};

/// Level used when RUST_LOG is unset: the CLI flag, then the config value.
pub fn resolve_level<'a>(cli_level: Option<&'a str>, config_level: &'a str) -> &'a str {
    cli_level
        .filter(|level| !level.trim().is_empty())
        .unwrap_or(config_level)
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_path`. Keep the returned
/// guard alive for the whole run; dropping it flushes pending lines.
pub fn init(log_path: &Path, default_level: &str) -> Result<WorkerGuard> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| AuthScreenError::Config(format!("Invalid log file path: {}", log_path.display())))?;

    std::fs::create_dir_all(dir)
        .map_err(|e| AuthScreenError::Config(format!("Failed to create log dir: {}", e)))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Ok(guard)
}
