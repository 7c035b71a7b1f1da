//! Availability-gated view/download binding for one document.
//!
//! Whether the affordances exist at all is decided here, once, from the raw
//! file reference: an unresolvable reference yields a control with no path
//! to either operation, by construction.

use serde_json::Value;
use std::path::Path;

use crate::api::DocRecord;
use crate::fetch::FetchOptions;
use crate::file_url::resolve_file_url;
use crate::format::format_file_size;
use crate::retrieve::{self, Opener, Outcome};

/// Tooltip carried by a disabled control.
pub const FILE_UNAVAILABLE_TOOLTIP: &str = "File not available";

/// View/download control for one document.
#[derive(Debug)]
pub enum FileControl {
    Available(AvailableFile),
    Unavailable,
}

/// An enabled control: the reference resolved, both operations are wired.
#[derive(Debug)]
pub struct AvailableFile {
    url: String,
    file_name: Option<String>,
    file_size: Option<u64>,
}

impl FileControl {
    /// Derives the control from a raw reference. Enabled exactly when the
    /// reference resolves; the derivation is recomputed here on every call,
    /// never cached.
    pub fn new(
        raw: &Value,
        file_name: Option<&str>,
        file_size: Option<u64>,
        api_base: &str,
    ) -> Self {
        match resolve_file_url(raw, api_base) {
            Some(url) => FileControl::Available(AvailableFile {
                url,
                file_name: file_name.map(str::to_string),
                file_size,
            }),
            None => FileControl::Unavailable,
        }
    }

    pub fn for_record(record: &DocRecord, api_base: &str) -> Self {
        Self::new(
            &record.file_ref,
            record.file_name.as_deref(),
            record.file_size,
            api_base,
        )
    }

    pub fn is_available(&self) -> bool {
        matches!(self, FileControl::Available(_))
    }

    /// Explanation for the disabled state.
    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            FileControl::Available(_) => None,
            FileControl::Unavailable => Some(FILE_UNAVAILABLE_TOOLTIP),
        }
    }
}

impl AvailableFile {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Size rendered beneath the download label, e.g. `"1.5 KB"`.
    pub fn size_label(&self) -> String {
        format_file_size(self.file_size)
    }

    pub fn view(&self, opener: &dyn Opener) -> Outcome {
        retrieve::view(Some(&self.url), opener)
    }

    pub fn download(&self, dest_dir: &Path, opts: FetchOptions, opener: &dyn Opener) -> Outcome {
        retrieve::download(
            Some(&self.url),
            self.file_name.as_deref(),
            dest_dir,
            opts,
            opener,
        )
    }
}
