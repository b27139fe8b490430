//! Tests for pubs-model types.

use pubs_model::{
    Catalog, CategoryFilter, CategoryGroup, CategoryTag, PublicationRecord, SortOrder, ViewState,
};

fn tag(value: &str) -> CategoryTag {
    CategoryTag::new(value).unwrap()
}

fn sample_catalog() -> Catalog {
    let mut journals = CategoryGroup::new(tag("journal"), "Journal Articles");
    journals
        .add("Neural Networks for X", "A. Author. In Journal.", Some("2021"))
        .add("Graph Theory", "B. Author.", None);
    let mut talks = CategoryGroup::new(tag("conference"), "Conference Papers");
    talks.add("Scheduling", "C. Author.", Some("2019"));
    let mut more_journals = CategoryGroup::new(tag("journal"), "More Journals");
    more_journals.add("Extra", "", Some("2018"));
    Catalog::new(vec![journals, talks, more_journals])
}

#[test]
fn catalog_counts_records_across_groups() {
    let catalog = sample_catalog();
    assert_eq!(catalog.record_count(), 4);
    assert_eq!(catalog.records().count(), 4);
}

#[test]
fn catalog_with_only_empty_groups_is_empty() {
    assert!(Catalog::default().is_empty());
    let catalog = Catalog::new(vec![CategoryGroup::new(tag("book"), "Books")]);
    assert!(catalog.is_empty());
    assert!(!sample_catalog().is_empty());
}

#[test]
fn catalog_categories_are_unique_in_first_appearance_order() {
    let catalog = sample_catalog();
    let categories: Vec<&str> = catalog.categories().iter().map(|c| c.as_str()).collect();
    assert_eq!(categories, vec!["journal", "conference"]);
}

#[test]
fn catalog_group_lookup_is_exact() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.group("conference").map(|g| g.heading.as_str()),
        Some("Conference Papers")
    );
    assert!(catalog.group("Conference").is_none());
}

#[test]
fn records_inherit_group_category() {
    let catalog = sample_catalog();
    assert!(
        catalog.groups[0]
            .records
            .iter()
            .all(|record| record.category.as_str() == "journal")
    );
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = sample_catalog();
    let json = serde_json::to_string(&catalog).expect("serialize catalog");
    let round: Catalog = serde_json::from_str(&json).expect("deserialize catalog");
    assert_eq!(round, catalog);
}

#[test]
fn blank_category_is_rejected_when_deserializing() {
    let json = r#"{"title": "T", "category": "  "}"#;
    let result: Result<PublicationRecord, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn view_state_serializes_with_wire_names() {
    let state = ViewState {
        search_term: "graph".to_string(),
        filter: CategoryFilter::from_value("journal"),
        sort: SortOrder::YearAsc,
    };
    let value = serde_json::to_value(&state).expect("serialize state");
    assert_eq!(value["filter"], "journal");
    assert_eq!(value["sort"], "year-asc");

    let defaults = serde_json::to_value(ViewState::default()).expect("serialize defaults");
    assert_eq!(defaults["filter"], "all");
    assert_eq!(defaults["sort"], "year-desc");
}
