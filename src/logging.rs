//! Log set-up for the `featext` binary.
//!
//! Records go to stderr, filtered by `-v` or `RUST_LOG`. An extraction run
//! also appends them to a persistent log file, so the diagnostics of a run
//! survive after the delimited table has dropped them.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::core::errors::{Error, Result};
use crate::io::ensure_dir;

/// File name of the log inside the results directory
pub const LOG_FILE_NAME: &str = "feature_extract.log";

/// A log file larger than this is cut down to its most recent records
pub const LOG_SIZE_LIMIT: usize = 10_000;

/// Filter used when `RUST_LOG` is unset
pub fn verbosity_filter(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Stderr output under `filter`, plus every record at info or above in
/// `log_file` when one is given.
pub fn subscriber(
    filter: EnvFilter,
    log_file: Option<File>,
) -> impl Subscriber + Send + Sync + 'static {
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::INFO)
    });

    Registry::default().with(stderr_layer).with(file_layer)
}

/// Open `path` for appending, creating it and its directory as needed.
///
/// An oversized log is first rewritten to keep only its last
/// [`LOG_SIZE_LIMIT`] bytes, starting at a line boundary.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    if path.is_file() {
        truncate_log(path, LOG_SIZE_LIMIT)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| file_error("cannot open log file", path, e))?;
    writeln!(file)?;
    Ok(file)
}

fn truncate_log(path: &Path, limit: usize) -> Result<()> {
    let data = fs::read(path).map_err(|e| file_error("cannot read log file", path, e))?;
    if data.len() <= limit {
        return Ok(());
    }

    let tail = &data[data.len() - limit..];
    let kept = match tail.iter().position(|&b| b == b'\n') {
        Some(newline) => &tail[newline + 1..],
        None => &[],
    };
    fs::write(path, kept).map_err(|e| file_error("cannot rewrite log file", path, e))
}

fn file_error(message: &str, path: &Path, source: std::io::Error) -> Error {
    Error::FileSystem {
        message: format!("{}: {}", message, path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    }
}
