//! File name sanitization for group strings

/// Characters dropped from group names
const STRIPPED_CHARS: &[char] = &['(', ')', '{', '}', ','];

/// Turn a group string into a file name fragment
///
/// Spaces become `_`, parentheses, braces and commas are dropped, then every
/// `...` is removed. Applying it twice gives the same result as once.
pub fn sanitize_group(group: &str) -> String {
    group
        .replace(' ', "_")
        .replace(STRIPPED_CHARS, "")
        .replace("...", "")
}

/// Output file name for a per-query chart
pub fn query_type_file_name(group: &str) -> String {
    format!("query_type_{}.png", sanitize_group(group))
}
