//! Filename validation and sanitization

/// File extensions accepted for upload, matched case-sensitively against
/// the substring after the last `.` of the client-supplied filename.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["txt", "pdf", "png", "jpg", "jpeg", "gif"];

/// Check the client-supplied filename against the extension allow-list.
///
/// A name without a `.` has no extension and is rejected.
pub fn extension_allowed(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Sanitize a client-supplied filename for storage.
///
/// Takes the last path component (both `/` and `\` count as separators),
/// maps whitespace to `_`, drops every character outside `[A-Za-z0-9._-]`,
/// and trims leading dots. The result cannot name a parent directory or
/// contain control characters. Returns `None` when nothing safe remains.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
