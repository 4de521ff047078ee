/// Lowercased, trimmed needle; `None` when the search box is blank.
pub(crate) fn needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-folded key used for alphabetical ordering of display names.
pub fn collation_key(value: &str) -> String {
    value.trim().to_lowercase()
}
