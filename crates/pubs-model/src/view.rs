//! User-selected view state: search term, category filter, sort order.
//!
//! Every combination of the three fields is valid and reachable from every
//! other one; there are no transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Sentinel filter value that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// Ordering applied within each category group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest first.
    #[default]
    YearDesc,
    /// Oldest first.
    YearAsc,
    /// Original document order.
    Default,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::YearDesc => "year-desc",
            SortOrder::YearAsc => "year-asc",
            SortOrder::Default => "default",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "year-desc" => Ok(SortOrder::YearDesc),
            "year-asc" => Ok(SortOrder::YearAsc),
            "default" => Ok(SortOrder::Default),
            _ => Err(ModelError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Single-select category filter.
///
/// Any value other than [`ALL_CATEGORIES`] is kept verbatim; a value that no
/// group carries simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(value) => value,
        }
    }

    /// Exact, case-sensitive comparison against a category tag.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(value) => value == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from_value(value)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from_value(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(value) => value,
        }
    }
}

/// Current search/filter/sort combination.
///
/// `search_term` is stored already normalized (trimmed, lowercase).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub filter: CategoryFilter,
    pub sort: SortOrder,
}

/// Normalize raw search input: trim, then lowercase.
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}
