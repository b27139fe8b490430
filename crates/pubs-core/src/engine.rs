//! Publication filter engine.
//!
//! The engine owns the [`ViewState`] and reconciles it against a borrowed,
//! immutable [`Catalog`]. Each setter stores its input and recomputes the
//! whole [`Projection`] synchronously; a recompute fully replaces the
//! previous one, so rapid successive calls never leave stale state behind.
//!
//! # Example
//!
//! ```
//! use pubs_core::FilterEngine;
//! use pubs_model::{Catalog, CategoryGroup, CategoryTag, SortOrder};
//!
//! let mut group = CategoryGroup::new(CategoryTag::new("journal").unwrap(), "Journals");
//! group.add("Neural Networks for X", "", Some("2021"));
//! group.add("Graph Theory", "", Some("2019"));
//! let catalog = Catalog::new(vec![group]);
//!
//! let mut engine = FilterEngine::new(&catalog);
//! let projection = engine.set_search_term("  Neural ");
//! assert_eq!(projection.visible_count, 1);
//! assert_eq!(
//!     projection.message.as_deref(),
//!     Some("Showing 1 result for \"neural\"")
//! );
//! engine.set_sort(SortOrder::YearAsc);
//! ```

use tracing::{debug, trace};

use pubs_model::{Catalog, CategoryFilter, SortOrder, ViewState, normalize_search_term};

use crate::matching::{group_admitted, is_visible};
use crate::ordering::display_order;
use crate::projection::{GroupProjection, Projection, result_message};
use crate::sink::ProjectionSink;

/// Search/filter/sort reconciliation over a static catalog.
#[derive(Debug, Clone)]
pub struct FilterEngine<'a> {
    catalog: &'a Catalog,
    state: ViewState,
    projection: Projection,
}

impl<'a> FilterEngine<'a> {
    /// Create an engine with default view state and an initial projection.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_state(catalog, ViewState::default())
    }

    /// Create an engine starting from `state`.
    ///
    /// The search term is normalized the same way [`Self::set_search_term`]
    /// does it.
    pub fn with_state(catalog: &'a Catalog, mut state: ViewState) -> Self {
        state.search_term = normalize_search_term(&state.search_term);
        let mut engine = Self {
            catalog,
            state,
            projection: Projection::default(),
        };
        engine.recompute();
        engine
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn set_search_term(&mut self, term: &str) -> &Projection {
        self.state.search_term = normalize_search_term(term);
        trace!(search_term = %self.state.search_term, "search term changed");
        self.recompute()
    }

    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) -> &Projection {
        self.state.filter = filter.into();
        trace!(filter = %self.state.filter, "filter changed");
        self.recompute()
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> &Projection {
        self.state.sort = sort;
        trace!(sort = %sort, "sort order changed");
        self.recompute()
    }

    /// Restore default view state.
    pub fn reset(&mut self) -> &Projection {
        self.state = ViewState::default();
        trace!("view state reset");
        self.recompute()
    }

    /// Recompute visibility, ordering and the result message from the
    /// current state.
    pub fn recompute(&mut self) -> &Projection {
        let filter = &self.state.filter;
        let term = self.state.search_term.as_str();
        let mut visible_count = 0usize;
        let mut groups = Vec::with_capacity(self.catalog.groups.len());

        for group in &self.catalog.groups {
            let record_visible: Vec<bool> = group
                .records
                .iter()
                .map(|record| is_visible(record, filter, term))
                .collect();
            let shown = record_visible.iter().filter(|&&v| v).count();
            visible_count += shown;
            let visible = group_admitted(group, filter) && shown > 0;
            let order = display_order(&group.records, self.state.sort);
            groups.push(GroupProjection {
                category: group.category.clone(),
                heading: group.heading.clone(),
                visible,
                order,
                record_visible,
            });
        }

        self.projection = Projection {
            groups,
            visible_count,
            message: result_message(term, visible_count),
        };
        debug!(
            search_term = %term,
            filter = %filter,
            sort = %self.state.sort,
            visible_count,
            visible_groups = self.projection.groups.iter().filter(|g| g.visible).count(),
            "recomputed projection"
        );
        &self.projection
    }

    /// Hand the current projection to `sink`.
    pub fn apply_to<S: ProjectionSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.apply(self.catalog, &self.projection)
    }
}
