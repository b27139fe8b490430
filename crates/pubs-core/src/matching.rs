//! Visibility predicates.
//!
//! Search is plain case-insensitive substring containment over the title and
//! the details text. There is no tokenizing, fuzzy matching or ranking.

use pubs_model::{CategoryFilter, CategoryGroup, PublicationRecord};

/// True when `term` is empty or occurs in the record's title or details.
///
/// `term` must already be normalized (see [`pubs_model::normalize_search_term`]).
pub fn matches_search(record: &PublicationRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(term) || record.details.to_lowercase().contains(term)
}

/// True when the filter is `all` or names the record's category exactly.
pub fn matches_filter(record: &PublicationRecord, filter: &CategoryFilter) -> bool {
    filter.admits(record.category.as_str())
}

/// A record is shown only when both predicates hold.
pub fn is_visible(record: &PublicationRecord, filter: &CategoryFilter, term: &str) -> bool {
    matches_filter(record, filter) && matches_search(record, term)
}

/// Group-level half of the visibility rule: the filter must admit the
/// group's own category. The caller still requires one visible record.
pub fn group_admitted(group: &CategoryGroup, filter: &CategoryFilter) -> bool {
    filter.admits(group.category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubs_model::CategoryTag;

    fn record(title: &str, details: &str) -> PublicationRecord {
        PublicationRecord::new(CategoryTag::new("journal").unwrap(), title).with_details(details)
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches_search(&record("Anything", ""), ""));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_details() {
        let r = record("Neural Networks", "Smith, J. In Nature.");
        assert!(matches_search(&r, "neural"));
        assert!(matches_search(&r, "nature"));
        assert!(!matches_search(&r, "graph"));
    }

    #[test]
    fn search_is_substring_not_token_match() {
        let r = record("Convolutional", "");
        assert!(matches_search(&r, "volution"));
    }

    #[test]
    fn filter_and_search_are_conjunctive() {
        let r = record("Neural Networks", "");
        let journal = CategoryFilter::from_value("journal");
        let book = CategoryFilter::from_value("book");
        assert!(is_visible(&r, &journal, "neural"));
        assert!(!is_visible(&r, &book, "neural"));
        assert!(!is_visible(&r, &journal, "graph"));
    }
}
