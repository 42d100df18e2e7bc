use std::collections::HashSet;

/// Parses a newline-separated stop-word resource.
///
/// Entries are trimmed and lowercased. Blank lines and lines starting with `#`
/// are ignored.
pub fn parse_stop_words(resource: &str) -> HashSet<String> {
    resource
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
