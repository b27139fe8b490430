//! Machine-readable listing of what a projection shows.

use serde::Serialize;

use pubs_core::Projection;
use pubs_model::{Catalog, ViewState};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedPublication {
    pub title: String,
    pub details: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedGroup {
    pub category: String,
    pub heading: String,
    pub publications: Vec<ListedPublication>,
}

/// Visible groups and records in display order, with the state that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionReport {
    pub state: ViewState,
    pub visible_count: usize,
    pub message: Option<String>,
    pub groups: Vec<ListedGroup>,
}

impl ProjectionReport {
    pub fn build(catalog: &Catalog, projection: &Projection, state: &ViewState) -> Self {
        let groups = projection
            .visible_groups(&catalog.groups)
            .map(|(group, group_projection)| ListedGroup {
                category: group.category.to_string(),
                heading: group.heading.clone(),
                publications: group_projection
                    .visible_records(group)
                    .map(|record| ListedPublication {
                        title: record.title.clone(),
                        details: record.details.clone(),
                        year: record.year.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            state: state.clone(),
            visible_count: projection.visible_count,
            message: projection.message.clone(),
            groups,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
