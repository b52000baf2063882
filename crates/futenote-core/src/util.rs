//! Shared utility functions used across multiple modules.

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// First line of a note's content, truncated to `max_len` characters.
pub fn content_preview(content: &str, max_len: usize) -> String {
    content
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(max_len)
        .collect()
}
