//! File reference resolution and filename derivation.
//!
//! The backend stores document paths inconsistently: absolute OS paths,
//! relative paths, mixed separators, occasionally full URLs, occasionally
//! non-string junk. The one stable anchor is the public `uploads/` serving
//! route, so resolution discards everything before that marker and grafts
//! the remainder onto the server origin.

mod filename;
mod sanitize;

pub use filename::filename_from_url;
pub use sanitize::sanitize_file_name;

use serde_json::Value;

/// Directory segment the backend serves files under.
const UPLOADS_MARKER: &str = "uploads/";

/// Default save name when neither the record nor the URL yields one.
const DEFAULT_SAVE_NAME: &str = "download";

/// Maps a raw stored file reference to a fetchable absolute URL.
///
/// Total and pure: every input maps to `Some(url)` or `None`, never a panic.
/// Rules, in order:
/// - non-string or empty-after-trim values are unresolvable;
/// - an absolute `http`/`https` URL is returned unchanged (backend-supplied
///   URLs are trusted, not rewritten);
/// - otherwise the value is treated as a storage path: separators are
///   normalized, the `uploads/` marker is located case-insensitively, and
///   the suffix from the marker onward is appended to the server origin;
/// - a path without the marker is unresolvable rather than guessed at.
pub fn resolve_file_url(raw: &Value, api_base: &str) -> Option<String> {
    let text = raw.as_str()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_absolute_http(trimmed) {
        return Some(trimmed.to_string());
    }

    let normalized = trimmed.replace('\\', "/");

    let slashed = format!("/{UPLOADS_MARKER}");
    let uploads_path = if let Some(i) = find_ascii_ci(&normalized, &slashed) {
        normalized[i..].to_string()
    } else if let Some(i) = find_ascii_ci(&normalized, UPLOADS_MARKER) {
        format!("/{}", &normalized[i..])
    } else {
        return None;
    };

    Some(format!("{}{}", server_origin(api_base), uploads_path))
}

/// Origin the file-serving route lives under: the API base with a trailing
/// `/api` (or `/api/`) suffix and any trailing slash stripped.
pub fn server_origin(api_base: &str) -> String {
    let mut base = api_base.trim().trim_end_matches('/');
    // Suffix is ASCII, so the cut lands on a char boundary.
    let bytes = base.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b"/api") {
        base = &base[..base.len() - 4];
    }
    base.trim_end_matches('/').to_string()
}

/// Picks the name a downloaded document is saved under.
///
/// Prefers the catalog record's file name, else the last path segment of the
/// resolved URL; either way the result is sanitized for the local
/// filesystem. Falls back to `"download"` when nothing usable remains.
pub fn save_file_name(record_name: Option<&str>, url: &str) -> String {
    let candidate = record_name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| filename_from_url(url));

    let raw = match candidate {
        Some(c) => c,
        None => return DEFAULT_SAVE_NAME.to_string(),
    };

    let sanitized = sanitize_file_name(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_SAVE_NAME.to_string()
    } else {
        sanitized
    }
}

fn is_absolute_http(s: &str) -> bool {
    let bytes = s.as_bytes();
    (bytes.len() >= 7 && bytes[..7].eq_ignore_ascii_case(b"http://"))
        || (bytes.len() >= 8 && bytes[..8].eq_ignore_ascii_case(b"https://"))
}

/// Byte index of the first ASCII-case-insensitive occurrence of `needle`.
/// The needle is pure ASCII, so a hit always lands on a char boundary.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const API_BASE: &str = "http://host:5000/api";

    #[test]
    fn non_string_inputs_unresolvable() {
        assert_eq!(resolve_file_url(&Value::Null, API_BASE), None);
        assert_eq!(resolve_file_url(&json!(42), API_BASE), None);
        assert_eq!(resolve_file_url(&json!({ "path": "x" }), API_BASE), None);
        assert_eq!(resolve_file_url(&json!(["uploads/a.pdf"]), API_BASE), None);
        assert_eq!(resolve_file_url(&json!(true), API_BASE), None);
    }

    #[test]
    fn empty_after_trim_unresolvable() {
        assert_eq!(resolve_file_url(&json!(""), API_BASE), None);
        assert_eq!(resolve_file_url(&json!("   \t "), API_BASE), None);
    }

    #[test]
    fn absolute_url_returned_unchanged() {
        let url = "https://cdn.example/a.pdf";
        assert_eq!(
            resolve_file_url(&json!(url), API_BASE).as_deref(),
            Some(url)
        );
        // Case-insensitive scheme match, no rewriting.
        assert_eq!(
            resolve_file_url(&json!("HTTP://cdn.example/a.pdf"), API_BASE).as_deref(),
            Some("HTTP://cdn.example/a.pdf")
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve_file_url(&json!("/var/data/uploads/2024/paper.pdf"), API_BASE).unwrap();
        let second = resolve_file_url(&json!(first.clone()), API_BASE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn marker_anchoring_strips_storage_prefix() {
        assert_eq!(
            resolve_file_url(&json!("/var/data/uploads/2024/paper.pdf"), API_BASE).as_deref(),
            Some("http://host:5000/uploads/2024/paper.pdf")
        );
    }

    #[test]
    fn backslash_and_forward_slash_paths_agree() {
        let back = resolve_file_url(&json!("C:\\store\\uploads\\sub\\a.pdf"), API_BASE);
        let forward = resolve_file_url(&json!("C:/store/uploads/sub/a.pdf"), API_BASE);
        assert_eq!(back, forward);
        assert_eq!(back.as_deref(), Some("http://host:5000/uploads/sub/a.pdf"));
    }

    #[test]
    fn bare_marker_gets_leading_slash() {
        assert_eq!(
            resolve_file_url(&json!("uploads/notes/u1.pdf"), API_BASE).as_deref(),
            Some("http://host:5000/uploads/notes/u1.pdf")
        );
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        assert_eq!(
            resolve_file_url(&json!("/srv/Uploads/a.pdf"), API_BASE).as_deref(),
            Some("http://host:5000/Uploads/a.pdf")
        );
    }

    #[test]
    fn unmatched_path_unresolvable() {
        assert_eq!(
            resolve_file_url(&json!("/var/data/random/paper.pdf"), API_BASE),
            None
        );
    }

    #[test]
    fn server_origin_tolerates_base_variants() {
        assert_eq!(server_origin("http://host:5000/api"), "http://host:5000");
        assert_eq!(server_origin("http://host:5000/api/"), "http://host:5000");
        assert_eq!(server_origin("http://host:5000/API"), "http://host:5000");
        assert_eq!(server_origin("http://host:5000"), "http://host:5000");
        assert_eq!(server_origin("http://host:5000/"), "http://host:5000");
    }

    #[test]
    fn save_name_prefers_record_name() {
        assert_eq!(
            save_file_name(Some("Syllabus 2024.pdf"), "http://h/uploads/x.pdf"),
            "Syllabus_2024.pdf"
        );
    }

    #[test]
    fn save_name_falls_back_to_url_segment() {
        assert_eq!(
            save_file_name(None, "http://h/uploads/2024/paper.pdf"),
            "paper.pdf"
        );
        assert_eq!(save_file_name(Some("  "), "http://h/uploads/q.pdf"), "q.pdf");
    }

    #[test]
    fn save_name_generic_fallback() {
        assert_eq!(save_file_name(None, "http://h/"), "download");
        assert_eq!(save_file_name(Some(".."), "http://h/"), "download");
    }
}
