//! Display ordering within a category group.

use pubs_model::{PublicationRecord, SortOrder};

/// Indices of `records` in display order for `sort`.
///
/// Year orderings are stable: records with equal years keep their original
/// relative order. `SortOrder::Default` is the original document order.
pub fn display_order(records: &[PublicationRecord], sort: SortOrder) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    match sort {
        SortOrder::Default => {}
        SortOrder::YearDesc => {
            order.sort_by_key(|&index| std::cmp::Reverse(records[index].year_value()));
        }
        SortOrder::YearAsc => {
            order.sort_by_key(|&index| records[index].year_value());
        }
    }
    order
}
