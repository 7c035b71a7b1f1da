//! Logging init: file under the XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,smf=debug"))
}

/// Initialize structured logging to `~/.local/state/smf/smf.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall
/// back to `init_logging_stderr`.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smf")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("smf.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // Each log line gets its own writer; if the handle can't be cloned the
    // line goes to stderr rather than being dropped.
    let make_writer = move || -> Box<dyn io::Write> {
        match file.try_clone() {
            Ok(f) => Box::new(f),
            Err(_) => Box::new(io::stderr()),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(make_writer)
        .with_ansi(false)
        .init();

    tracing::info!("smf logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when `init_logging`
/// fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
