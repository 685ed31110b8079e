//! Whitespace normalization

/// Collapse every run of whitespace (spaces, tabs, newlines) to a single
/// ASCII space and trim leading and trailing whitespace.
///
/// All-whitespace input yields the empty string.
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}
