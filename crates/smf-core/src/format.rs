//! Display formatting for sizes, dates, and names.

use chrono::DateTime;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable file size: binary units, one decimal.
///
/// `None` and zero both mean the backend did not record a size and render as
/// `"Unknown size"`.
pub fn format_file_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return "Unknown size".to_string(),
    };

    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(SIZE_UNITS.len() - 1);
    format!(
        "{:.1} {}",
        bytes as f64 / 1024f64.powi(exp as i32),
        SIZE_UNITS[exp]
    )
}

/// Short date for listings, e.g. `"Jan 5, 2024"`.
///
/// Input is the backend's RFC 3339 timestamp; anything unparsable is echoed
/// back unchanged rather than erroring a whole listing.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Lowercased extension-ish tail of a filename (last `.`-separated segment).
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Truncate to `length` characters, appending `...` when shortened.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_unknown() {
        assert_eq!(format_file_size(None), "Unknown size");
        assert_eq!(format_file_size(Some(0)), "Unknown size");
    }

    #[test]
    fn size_exact_boundaries() {
        assert_eq!(format_file_size(Some(1024)), "1.0 KB");
        assert_eq!(format_file_size(Some(1536)), "1.5 KB");
        assert_eq!(format_file_size(Some(1024 * 1024)), "1.0 MB");
    }

    #[test]
    fn size_sub_kilobyte() {
        assert_eq!(format_file_size(Some(512)), "512.0 B");
    }

    #[test]
    fn size_caps_at_gb() {
        assert_eq!(
            format_file_size(Some(5 * 1024 * 1024 * 1024 * 1024)),
            "5120.0 GB"
        );
    }

    #[test]
    fn date_rfc3339() {
        assert_eq!(format_date("2024-01-05T10:30:00Z"), "Jan 5, 2024");
        assert_eq!(format_date("2023-11-20T00:00:00+05:30"), "Nov 20, 2023");
    }

    #[test]
    fn date_unparsable_echoed() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn extension() {
        assert_eq!(file_extension("Paper.PDF"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
    }

    #[test]
    fn truncate_short_and_long() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a long...");
    }
}
