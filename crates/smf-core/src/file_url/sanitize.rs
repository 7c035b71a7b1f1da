//! Filesystem-safe save names.

/// Maximum filename length in bytes (Linux NAME_MAX).
const NAME_MAX: usize = 255;

/// Sanitizes a candidate save name for the local filesystem.
///
/// - Replaces NUL, `/`, `\`, whitespace, and control characters with `_`
/// - Collapses runs of `_`
/// - Trims leading/trailing spaces, dots, and underscores
/// - Limits length to 255 bytes
pub fn sanitize_file_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c == ' ' || c == '\t' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let collapsed = replaced
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let trimmed = collapsed.trim_matches(|c| c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
