use serde::{Deserialize, Serialize};

use crate::{CategoryGroup, CategoryTag, PublicationRecord};

/// The full, static publication listing: groups in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<CategoryGroup>,
}

impl Catalog {
    pub fn new(groups: Vec<CategoryGroup>) -> Self {
        Self { groups }
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(CategoryGroup::len).sum()
    }

    /// Category tags in first-appearance order, without duplicates.
    pub fn categories(&self) -> Vec<&CategoryTag> {
        let mut seen: Vec<&CategoryTag> = Vec::new();
        for group in &self.groups {
            if !seen.contains(&&group.category) {
                seen.push(&group.category);
            }
        }
        seen
    }

    pub fn group(&self, category: &str) -> Option<&CategoryGroup> {
        self.groups
            .iter()
            .find(|group| group.category.as_str() == category)
    }

    /// All records in document order (group by group).
    pub fn records(&self) -> impl Iterator<Item = &PublicationRecord> {
        self.groups.iter().flat_map(|group| group.records.iter())
    }

    /// True when no group holds a record.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(CategoryGroup::is_empty)
    }
}
