/// Keep the names containing `search_term` as a literal, case-sensitive
/// substring. Order is preserved; an empty term keeps everything.
pub fn filter_with_search_term(names: &[String], search_term: &str) -> Vec<String> {
    if search_term.is_empty() {
        return names.to_vec();
    }

    names
        .iter()
        .filter(|name| name.contains(search_term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_filter_preserves_order() {
        let result = filter_with_search_term(&names(&["foo", "bar", "foobar"]), "foo");
        assert_eq!(result, names(&["foo", "foobar"]));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let result = filter_with_search_term(&names(&["Docs", "docs", "DOCS"]), "doc");
        assert_eq!(result, names(&["docs"]));
    }

    #[test]
    fn test_filter_matches_anywhere() {
        let result = filter_with_search_term(&names(&["projects", "rust-proj", "notes"]), "proj");
        assert_eq!(result, names(&["projects", "rust-proj"]));
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_with_search_term(&names(&["a", "b"]), "zzz").is_empty());
    }

    proptest! {
        #[test]
        fn prop_empty_term_is_identity(items in prop::collection::vec("[a-z._-]{0,8}", 0..20)) {
            prop_assert_eq!(filter_with_search_term(&items, ""), items);
        }

        #[test]
        fn prop_result_is_ordered_subsequence(
            items in prop::collection::vec("[a-c]{0,4}", 0..20),
            term in "[a-c]{1,2}",
        ) {
            let result = filter_with_search_term(&items, &term);
            let expected: Vec<String> = items.iter().filter(|n| n.contains(&term)).cloned().collect();
            prop_assert_eq!(result, expected);
        }
    }
}
