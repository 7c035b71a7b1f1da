//! View and download operations against a resolved file URL.
//!
//! Both refuse up front when no URL resolved, without touching the network.
//! `download` falls back to the same external open as `view` on any failure
//! (transport, HTTP status, disk), so the user always has a path to the
//! content. Nothing here escalates into a caller-visible error; the result
//! is reported as an [`Outcome`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::fetch::{fetch_bytes, FetchOptions};
use crate::file_url::save_file_name;
use crate::storage;

/// Notice shown when an operation is refused because no URL resolved.
pub const FILE_UNAVAILABLE_NOTICE: &str = "File URL not available. Please try again later.";

/// How a view/download request ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No URL; nothing was attempted.
    Refused,
    /// Handed to the external opener.
    Opened,
    /// Body saved to disk at the given path.
    Saved(PathBuf),
    /// Download failed for the stated reason; the URL was opened externally
    /// instead.
    OpenedFallback(String),
}

/// Hands a URL to something outside this process. The seam exists so tests
/// can observe open requests without a desktop.
pub trait Opener {
    fn open_external(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the desktop's default handler, detached: the spawned
/// process gets no inherited stdio and is never waited on, so a failed or
/// blocked load cannot affect the caller.
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open_external(&self, url: &str) -> Result<()> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Command::new(program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("launch {program}"))?;
        Ok(())
    }
}

/// Opens the document externally. Opener failures are logged, not surfaced;
/// there is nothing actionable for the caller once the handoff is made.
pub fn view(url: Option<&str>, opener: &dyn Opener) -> Outcome {
    let Some(url) = url else {
        tracing::warn!("view refused: no resolved URL");
        return Outcome::Refused;
    };
    if let Err(e) = opener.open_external(url) {
        tracing::error!("view open failed for {url}: {e:#}");
    }
    Outcome::Opened
}

/// Fetches the document and saves it under `dest_dir`.
///
/// The save name comes from the catalog record when present, else the URL's
/// last path segment, sanitized either way. Any failure falls back to an
/// external open of the same URL.
pub fn download(
    url: Option<&str>,
    record_name: Option<&str>,
    dest_dir: &Path,
    opts: FetchOptions,
    opener: &dyn Opener,
) -> Outcome {
    let Some(url) = url else {
        tracing::warn!("download refused: no resolved URL");
        return Outcome::Refused;
    };

    let body = match fetch_bytes(url, opts) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("download of {url} failed ({e}), opening externally");
            return fall_back(url, e.to_string(), opener);
        }
    };

    let name = save_file_name(record_name, url);
    match storage::save_bytes(dest_dir, &name, &body) {
        Ok(path) => {
            tracing::info!("saved {url} to {}", path.display());
            Outcome::Saved(path)
        }
        Err(e) => {
            tracing::warn!("saving {url} failed ({e:#}), opening externally");
            fall_back(url, e.to_string(), opener)
        }
    }
}

fn fall_back(url: &str, reason: String, opener: &dyn Opener) -> Outcome {
    if let Err(e) = opener.open_external(url) {
        tracing::error!("fallback open failed for {url}: {e:#}");
    }
    Outcome::OpenedFallback(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl RecordingOpener {
        fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl Opener for RecordingOpener {
        fn open_external(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn view_refuses_without_url() {
        let opener = RecordingOpener::default();
        assert_eq!(view(None, &opener), Outcome::Refused);
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn view_hands_url_to_opener() {
        let opener = RecordingOpener::default();
        assert_eq!(
            view(Some("http://host:5000/uploads/a.pdf"), &opener),
            Outcome::Opened
        );
        assert_eq!(opener.opened(), vec!["http://host:5000/uploads/a.pdf"]);
    }

    #[test]
    fn download_refuses_without_url() {
        let dir = tempfile::tempdir().unwrap();
        let opener = RecordingOpener::default();
        let outcome = download(None, None, dir.path(), FetchOptions::default(), &opener);
        assert_eq!(outcome, Outcome::Refused);
        assert!(opener.opened().is_empty());
    }
}
