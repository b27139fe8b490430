//! Scenario and property tests for the filter engine.

use proptest::prelude::*;

use pubs_core::{FilterEngine, matches_filter, matches_search};
use pubs_model::{Catalog, CategoryFilter, CategoryGroup, CategoryTag, SortOrder};

fn group(category: &str, heading: &str, records: &[(&str, &str, Option<&str>)]) -> CategoryGroup {
    let mut group = CategoryGroup::new(CategoryTag::new(category).unwrap(), heading);
    for (title, details, year) in records {
        group.add(*title, *details, *year);
    }
    group
}

fn years_in_display_order(catalog: &Catalog, engine: &FilterEngine<'_>, index: usize) -> Vec<i64> {
    let records = &catalog.groups[index].records;
    engine.projection().groups[index]
        .order
        .iter()
        .map(|&i| records[i].year_value())
        .collect()
}

#[test]
fn scenario_a_year_desc_orders_newest_first() {
    let catalog = Catalog::new(vec![group(
        "journal",
        "Journal Articles",
        &[
            ("A", "", Some("2020")),
            ("B", "", Some("2022")),
            ("C", "", Some("2021")),
        ],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    engine.set_sort(SortOrder::YearDesc);
    assert_eq!(
        years_in_display_order(&catalog, &engine, 0),
        vec![2022, 2021, 2020]
    );
}

#[test]
fn scenario_b_search_shows_matching_title_and_message() {
    let catalog = Catalog::new(vec![group(
        "journal",
        "Journal Articles",
        &[
            ("Neural Networks for X", "", Some("2021")),
            ("Graph Theory", "", Some("2020")),
        ],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    let projection = engine.set_search_term("neural");
    let journal = projection.group("journal").unwrap();
    assert_eq!(journal.record_visible, vec![true, false]);
    assert!(journal.visible);
    assert_eq!(projection.visible_count, 1);
    assert_eq!(
        projection.message.as_deref(),
        Some("Showing 1 result for \"neural\"")
    );
}

#[test]
fn scenario_c_group_hidden_when_category_mismatches_filter() {
    let catalog = Catalog::new(vec![
        group(
            "journal",
            "Journal Articles",
            &[
                ("Learning A", "", Some("2021")),
                ("Learning B", "", Some("2020")),
            ],
        ),
        group("conference", "Conference Papers", &[("Other", "", Some("2019"))]),
    ]);
    let mut engine = FilterEngine::new(&catalog);
    engine.set_search_term("learning");
    let projection = engine.set_filter("conference");
    let journal = projection.group("journal").unwrap();
    assert!(!journal.visible);
    assert_eq!(journal.record_visible, vec![false, false]);
    assert!(!projection.group("conference").unwrap().visible);
    assert_eq!(projection.visible_count, 0);
    assert_eq!(
        projection.message.as_deref(),
        Some("Showing 0 results for \"learning\"")
    );
}

#[test]
fn scenario_d_missing_year_sorts_first_ascending() {
    let catalog = Catalog::new(vec![group(
        "book",
        "Books",
        &[
            ("Dated", "", Some("1")),
            ("Undated", "", None),
            ("Later", "", Some("2015")),
        ],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    let projection = engine.set_sort(SortOrder::YearAsc);
    assert_eq!(projection.groups[0].order, vec![1, 0, 2]);
}

#[test]
fn default_sort_restores_document_order() {
    let catalog = Catalog::new(vec![group(
        "journal",
        "Journal Articles",
        &[
            ("A", "", Some("2020")),
            ("B", "", Some("2022")),
            ("C", "", Some("2021")),
        ],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    engine.set_sort(SortOrder::YearAsc);
    let projection = engine.set_sort(SortOrder::Default);
    assert_eq!(projection.groups[0].order, vec![0, 1, 2]);
}

#[test]
fn clearing_search_suppresses_message() {
    let catalog = Catalog::new(vec![group(
        "journal",
        "Journal Articles",
        &[("Neural", "", Some("2021"))],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    engine.set_search_term("neural");
    let projection = engine.set_search_term("   ");
    assert_eq!(projection.message, None);
    assert_eq!(projection.visible_count, 1);
}

#[test]
fn visible_records_follow_display_order() {
    let catalog = Catalog::new(vec![group(
        "journal",
        "Journal Articles",
        &[
            ("Neural old", "", Some("2010")),
            ("Graph", "", Some("2030")),
            ("Neural new", "", Some("2020")),
        ],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    engine.set_search_term("neural");
    let titles: Vec<&str> = engine.projection().groups[0]
        .visible_records(&catalog.groups[0])
        .map(|record| record.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Neural new", "Neural old"]);
}

#[test]
fn unknown_filter_hides_everything() {
    let catalog = Catalog::new(vec![group(
        "journal",
        "Journal Articles",
        &[("Neural", "", Some("2021"))],
    )]);
    let mut engine = FilterEngine::new(&catalog);
    let projection = engine.set_filter("Journal");
    assert_eq!(projection.visible_count, 0);
    assert!(!projection.groups[0].visible);
    assert_eq!(projection.message, None);
}

// --- properties ---

const CATEGORIES: [&str; 3] = ["journal", "conference", "book"];
const WORDS: [&str; 5] = ["neural", "graph", "learning", "theory", "systems"];

fn arb_record() -> impl Strategy<Value = (usize, usize, usize, Option<u16>)> {
    (
        0..CATEGORIES.len(),
        0..WORDS.len(),
        0..WORDS.len(),
        proptest::option::of(1990u16..2030),
    )
}

fn build_catalog(specs: &[(usize, usize, usize, Option<u16>)]) -> Catalog {
    let mut groups: Vec<CategoryGroup> = CATEGORIES
        .iter()
        .map(|c| CategoryGroup::new(CategoryTag::new(*c).unwrap(), *c))
        .collect();
    for (i, (category, title_word, details_word, year)) in specs.iter().enumerate() {
        let year = year.map(|y| y.to_string());
        groups[*category].add(
            format!("{} paper {i}", WORDS[*title_word].to_uppercase()),
            format!("Author {i}. On {}.", WORDS[*details_word]),
            year.as_deref(),
        );
    }
    Catalog::new(groups)
}

fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        (0..CATEGORIES.len()).prop_map(|i| CategoryFilter::from_value(CATEGORIES[i])),
        Just(CategoryFilter::from_value("thesis")),
    ]
}

fn arb_term() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0..WORDS.len()).prop_map(|i| WORDS[i].to_string()),
        (0..WORDS.len()).prop_map(|i| format!("  {} ", WORDS[i].to_uppercase())),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::YearDesc),
        Just(SortOrder::YearAsc),
        Just(SortOrder::Default),
    ]
}

proptest! {
    #[test]
    fn recompute_is_idempotent(
        specs in proptest::collection::vec(arb_record(), 0..24),
        term in arb_term(),
        filter in arb_filter(),
        sort in arb_sort(),
    ) {
        let catalog = build_catalog(&specs);
        let mut engine = FilterEngine::new(&catalog);
        engine.set_search_term(&term);
        engine.set_filter(filter);
        engine.set_sort(sort);
        let first = engine.recompute().clone();
        let second = engine.recompute().clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn visibility_is_filter_and_search(
        specs in proptest::collection::vec(arb_record(), 0..24),
        term in arb_term(),
        filter in arb_filter(),
    ) {
        let catalog = build_catalog(&specs);
        let mut engine = FilterEngine::new(&catalog);
        engine.set_filter(filter.clone());
        let projection = engine.set_search_term(&term).clone();
        let normalized = term.trim().to_lowercase();
        for (group, group_projection) in catalog.groups.iter().zip(&projection.groups) {
            for (index, record) in group.records.iter().enumerate() {
                let expected = matches_filter(record, &filter) && matches_search(record, &normalized);
                prop_assert_eq!(group_projection.record_visible[index], expected);
            }
        }
    }

    #[test]
    fn all_filter_group_visibility_depends_only_on_search(
        specs in proptest::collection::vec(arb_record(), 0..24),
        term in arb_term(),
    ) {
        let catalog = build_catalog(&specs);
        let mut engine = FilterEngine::new(&catalog);
        engine.set_search_term(&term);
        let projection = engine.set_filter("all").clone();
        let normalized = term.trim().to_lowercase();
        for (group, group_projection) in catalog.groups.iter().zip(&projection.groups) {
            let any_match = group.records.iter().any(|r| matches_search(r, &normalized));
            prop_assert_eq!(group_projection.visible, any_match);
        }
    }

    #[test]
    fn year_sorts_are_stable(
        specs in proptest::collection::vec(arb_record(), 0..24),
        sort in prop_oneof![Just(SortOrder::YearDesc), Just(SortOrder::YearAsc)],
    ) {
        let catalog = build_catalog(&specs);
        let mut engine = FilterEngine::new(&catalog);
        let projection = engine.set_sort(sort).clone();
        for (group, group_projection) in catalog.groups.iter().zip(&projection.groups) {
            let order = &group_projection.order;
            prop_assert_eq!(order.len(), group.records.len());
            for pair in order.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (ya, yb) = (group.records[a].year_value(), group.records[b].year_value());
                match sort {
                    SortOrder::YearDesc => prop_assert!(ya >= yb),
                    _ => prop_assert!(ya <= yb),
                }
                if ya == yb {
                    prop_assert!(a < b);
                }
            }
        }
    }

    #[test]
    fn order_is_a_permutation(
        specs in proptest::collection::vec(arb_record(), 0..24),
        term in arb_term(),
        filter in arb_filter(),
        sort in arb_sort(),
    ) {
        let catalog = build_catalog(&specs);
        let mut engine = FilterEngine::new(&catalog);
        engine.set_search_term(&term);
        engine.set_filter(filter);
        let projection = engine.set_sort(sort).clone();
        for (group, group_projection) in catalog.groups.iter().zip(&projection.groups) {
            let mut order = group_projection.order.clone();
            order.sort_unstable();
            prop_assert_eq!(order, (0..group.records.len()).collect::<Vec<_>>());
        }
    }
}
