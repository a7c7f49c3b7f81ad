//! Tracing setup: a daily-rolling log file, optionally mirrored to stderr.

use std::io::stderr;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use crate::{DukeError, Result};

pub const LOG_FILE_NAME: &str = "dukembb.log";

/// Directory used when no log directory is given: `<cache dir>/dukembb/logs`.
pub fn default_log_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("dukembb").join("logs")
}

fn env_filter() -> Result<EnvFilter> {
    let directive: Directive = "dukembb=info"
        .parse()
        .map_err(|e| DukeError::LogSetup(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Create the log directory and the rolling file appender inside it.
fn file_writer(log_dir: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        DukeError::LogSetup(format!(
            "Failed to create log directory {}: {e}",
            log_dir.display()
        ))
    })?;

    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// Logs always go to the file under `log_dir` (or [`default_log_dir`]);
/// `verbose` also writes them to stderr. `RUST_LOG` refines the filter.
/// The returned guard must live until exit so buffered lines are flushed.
pub fn setup_logging(log_dir: Option<&Path>, verbose: bool) -> Result<(PathBuf, WorkerGuard)> {
    let log_dir = log_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_dir);
    let (non_blocking, guard) = file_writer(&log_dir)?;

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let stderr_layer = if verbose {
        Some(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_ansi(true)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| DukeError::LogSetup(e.to_string()))?;

    Ok((log_dir.join(LOG_FILE_NAME), guard))
}
