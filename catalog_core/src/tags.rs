use std::collections::HashSet;

/// Trim and lowercase every tag, drop empty ones and keep only the first
/// occurrence of each normalized value.
///
/// Deduplication runs on the normalized form, so `["A", "a"]` collapses to
/// `["a"]` and applying the function to its own output changes nothing.
#[must_use]
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_lowercases_and_dedups() {
        let tags = normalize_tags(&["A", "a", " b "]);
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn drops_blank_tags() {
        let tags = normalize_tags(&["", "   ", "Search"]);
        assert_eq!(tags, vec!["search"]);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let tags = normalize_tags(&["Database", "ai", "DATABASE", "Git", "AI"]);
        assert_eq!(tags, vec!["database", "ai", "git"]);
    }

    #[test]
    fn already_normalized_is_unchanged() {
        let tags = vec!["devtools".to_string(), "git".to_string()];
        assert_eq!(normalize_tags(&tags), tags);
    }

    proptest! {
        #[test]
        fn normalizing_is_idempotent(tags in proptest::collection::vec("[ a-zA-Z0-9-]{0,8}", 0..12)) {
            let once = normalize_tags(&tags);
            let twice = normalize_tags(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_follows_first_occurrence_order(tags in proptest::collection::vec("[ a-cA-C]{0,3}", 0..12)) {
            let mut expected: Vec<String> = Vec::new();
            for tag in &tags {
                let value = tag.trim().to_lowercase();
                if !value.is_empty() && !expected.contains(&value) {
                    expected.push(value);
                }
            }
            prop_assert_eq!(normalize_tags(&tags), expected);
        }
    }
}
