//! Tracing setup.
//!
//! The TUI owns stdout, so events go to `folio.log` in the user's data
//! directory. Verbosity comes from `FOLIO_LOG` (an `EnvFilter` directive).

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_FILTER;

pub const LOG_FILE_NAME: &str = "folio.log";

/// Directory holding the log file.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("folio"))
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

/// Parse `filter`, falling back to the default level when it is invalid.
pub fn build_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// Returns the log path, or `None` when no log file could be opened, in
/// which case logging stays off.
pub fn init_tracing(filter: &str) -> Option<PathBuf> {
    let (path, file) = open_log_file()?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(filter))
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::info!(version = crate::cli::VERSION, "folio starting");
    Some(path)
}
