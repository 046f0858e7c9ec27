//! Slug derivation shared by the catalog list and the detail view

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derive the URL identifier for a display name: lowercase, with every
/// whitespace run replaced by a single hyphen.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Bubble Sort"), "bubble-sort");
        assert_eq!(slugify("Quick Sort"), "quick-sort");
        assert_eq!(slugify("Tim  \t Sort"), "tim-sort");
        assert_eq!(slugify("Radix"), "radix");
    }

    #[test]
    fn test_slugify_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(slugify(" Shell Sort "), "-shell-sort-");
    }
}
