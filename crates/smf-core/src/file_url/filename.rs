//! Filename hint from a URL path.

/// Last path segment of `url`, for use as a save-name hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
