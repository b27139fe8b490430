//! Engine output consumed by the rendering layer.

use serde::Serialize;

use pubs_model::{CategoryGroup, CategoryTag, PublicationRecord};

/// Visibility and ordering for one category group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupProjection {
    pub category: CategoryTag,
    pub heading: String,
    pub visible: bool,
    /// Original record indices in display order. Always a permutation of
    /// `0..record_visible.len()`; hidden records keep their slot.
    pub order: Vec<usize>,
    /// Per-record visibility, indexed by original record index.
    pub record_visible: Vec<bool>,
}

impl GroupProjection {
    pub fn visible_count(&self) -> usize {
        self.record_visible.iter().filter(|&&shown| shown).count()
    }

    pub fn is_record_visible(&self, index: usize) -> bool {
        self.record_visible.get(index).copied().unwrap_or(false)
    }

    /// Visible records of `group` in display order.
    ///
    /// `group` must be the catalog group this projection was computed for.
    pub fn visible_records<'a>(
        &'a self,
        group: &'a CategoryGroup,
    ) -> impl Iterator<Item = &'a PublicationRecord> + 'a {
        self.order
            .iter()
            .copied()
            .filter(move |&index| self.is_record_visible(index))
            .filter_map(move |index| group.records.get(index))
    }
}

/// Full reconciliation result for the current view state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// One entry per catalog group, in catalog order.
    pub groups: Vec<GroupProjection>,
    /// Number of records that passed both predicates.
    pub visible_count: usize,
    /// Result-count line; `None` while no search is active.
    pub message: Option<String>,
}

impl Projection {
    pub fn group(&self, category: &str) -> Option<&GroupProjection> {
        self.groups
            .iter()
            .find(|group| group.category.as_str() == category)
    }

    /// Pairs of (catalog group, projection) for groups that are shown.
    ///
    /// Projections are matched to catalog groups by position.
    pub fn visible_groups<'a>(
        &'a self,
        groups: &'a [CategoryGroup],
    ) -> impl Iterator<Item = (&'a CategoryGroup, &'a GroupProjection)> + 'a {
        groups
            .iter()
            .zip(self.groups.iter())
            .filter(|(_, projection)| projection.visible)
    }
}

/// `Showing N result(s) for "<term>"`, or `None` for an empty term.
pub fn result_message(term: &str, count: usize) -> Option<String> {
    if term.is_empty() {
        return None;
    }
    let noun = if count == 1 { "result" } else { "results" };
    Some(format!("Showing {count} {noun} for \"{term}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_suppressed_without_search() {
        assert_eq!(result_message("", 5), None);
    }

    #[test]
    fn message_pluralizes() {
        assert_eq!(
            result_message("neural", 1).as_deref(),
            Some("Showing 1 result for \"neural\"")
        );
        assert_eq!(
            result_message("neural", 0).as_deref(),
            Some("Showing 0 results for \"neural\"")
        );
        assert_eq!(
            result_message("graph", 3).as_deref(),
            Some("Showing 3 results for \"graph\"")
        );
    }
}
