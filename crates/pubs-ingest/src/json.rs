//! JSON catalog format.
//!
//! ```json
//! {
//!   "groups": [
//!     {
//!       "category": "journal",
//!       "heading": "Journal Articles",
//!       "publications": [
//!         { "title": "...", "details": "...", "year": 2021 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `heading`, `details` and `year` are optional. `year` is usually a string
//! or an integer; other values are kept as text and sort as 0 unless they
//! start with an integer.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pubs_model::{Catalog, CategoryGroup};

use crate::error::{IngestError, Result};
use crate::record::{category_tag, checked_title};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    category: String,
    #[serde(default)]
    heading: Option<String>,
    #[serde(default)]
    publications: Vec<PublicationEntry>,
}

#[derive(Debug, Deserialize)]
struct PublicationEntry {
    title: String,
    #[serde(default)]
    details: String,
    #[serde(default)]
    year: Option<YearValue>,
}

/// Any JSON value is accepted as a year; text that does not start with an
/// integer sorts as 0 instead of failing the load.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YearValue {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl YearValue {
    fn into_text(self) -> String {
        match self {
            YearValue::Number(number) => {
                integral_text(&number).unwrap_or_else(|| number.to_string())
            }
            YearValue::Text(text) => text,
            YearValue::Other(value) => value.to_string(),
        }
    }
}

/// `2021.0` and `1e3` become `"2021"` and `"1000"`.
fn integral_text(number: &serde_json::Number) -> Option<String> {
    if let Some(value) = number.as_i64() {
        return Some(value.to_string());
    }
    number
        .as_f64()
        .filter(|value| value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15)
        .map(|value| format!("{value:.0}"))
}

/// Parse a JSON catalog already read into memory. `path` is only used for
/// error reporting.
pub fn parse_json_catalog(path: &Path, contents: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut groups = Vec::with_capacity(file.groups.len());
    let mut position = 0usize;
    for entry in file.groups {
        position += 1;
        let category = category_tag(path, position, &entry.category)?;
        let heading = entry
            .heading
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| category.default_heading());
        let mut group = CategoryGroup::new(category, heading);
        for publication in entry.publications {
            position += 1;
            let title = checked_title(path, position, &publication.title)?;
            let year = publication
                .year
                .map(YearValue::into_text)
                .map(|y| y.trim().to_string())
                .filter(|y| !y.is_empty());
            group.add(title, publication.details.trim(), year.as_deref());
        }
        debug!(
            category = %group.category,
            records = group.len(),
            "loaded group"
        );
        groups.push(group);
    }
    Ok(Catalog::new(groups))
}
