//! Cleanup of captured values

/// Trim whitespace and any trailing run of `.`, `;` or `,`
pub(crate) fn clean_value(raw: &str) -> &str {
    raw.trim()
        .trim_end_matches(|c| matches!(c, '.' | ';' | ','))
        .trim()
}

/// Whether a cleaned value is long enough to keep
pub(crate) fn is_usable(value: &str, min_chars: usize) -> bool {
    value.chars().count() >= min_chars
}
