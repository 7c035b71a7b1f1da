//! Temp-file lifecycle for downloads.
//!
//! The body is written to a `.part` file beside the final name, fsynced,
//! then atomically renamed. The temp handle is released exactly once no
//! matter how the save attempt ends: rename consumes it, a failed rename
//! removes it, and dropping an unfinalized writer removes it.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix appended to the final name while the body is being written.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: `paper.pdf` → `paper.pdf.part`.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Sequential writer for an in-flight download.
pub struct PartFile {
    file: Option<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
    released: bool,
}

impl PartFile {
    /// Creates (truncating) the `.part` file next to `final_path`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp = temp_path(final_path);
        let file = File::create(&temp)
            .with_context(|| format!("create temp file: {}", temp.display()))?;
        Ok(Self {
            file: Some(file),
            temp_path: temp,
            final_path: final_path.to_path_buf(),
            released: false,
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let file = match self.file.as_mut() {
            Some(f) => f,
            None => anyhow::bail!("temp file already released"),
        };
        file.write_all(data)
            .with_context(|| format!("write to {}", self.temp_path.display()))
    }

    /// Syncs and atomically renames the temp file to the final path.
    /// The temp file is gone afterwards whether or not the rename succeeded.
    pub fn finalize(mut self) -> Result<PathBuf> {
        if let Some(file) = self.file.take() {
            file.sync_all()
                .with_context(|| format!("sync {}", self.temp_path.display()))?;
        }

        let result = fs::rename(&self.temp_path, &self.final_path);
        if result.is_err() {
            let _ = fs::remove_file(&self.temp_path);
        }
        self.released = true;

        result.with_context(|| {
            format!(
                "rename {} to {}",
                self.temp_path.display(),
                self.final_path.display()
            )
        })?;
        Ok(self.final_path.clone())
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        if !self.released {
            self.file.take();
            let _ = fs::remove_file(&self.temp_path);
            self.released = true;
        }
    }
}

/// Writes `body` under `file_name` in `dest_dir` via the `.part` protocol.
/// Returns the final path.
pub fn save_bytes(dest_dir: &Path, file_name: &str, body: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("create download dir: {}", dest_dir.display()))?;
    let final_path = dest_dir.join(file_name);
    let mut part = PartFile::create(&final_path)?;
    part.write_all(body)?;
    part.finalize()
}
