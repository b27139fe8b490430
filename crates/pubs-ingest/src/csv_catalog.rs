//! CSV catalog format.
//!
//! One row per publication with the columns `category`, `title`, `details`,
//! `year` and an optional `heading`. Rows are grouped by category in the
//! order categories first appear; the first non-empty heading seen for a
//! category names the group.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pubs_model::{Catalog, CategoryGroup};

use crate::error::{IngestError, Result};
use crate::record::{category_tag, checked_title};

#[derive(Debug, Deserialize)]
struct CsvRow {
    category: String,
    #[serde(default)]
    heading: Option<String>,
    title: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    year: Option<String>,
}

/// Parse CSV catalog data from `reader`. `path` is only used for error
/// reporting.
pub fn parse_csv_catalog<R: Read>(path: &Path, reader: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut named: Vec<bool> = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let record = index + 1;
        let row = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let category = category_tag(path, record, &row.category)?;
        let title = checked_title(path, record, &row.title)?;
        let heading = row.heading.filter(|h| !h.is_empty());

        let slot = match groups.iter().position(|g| g.category == category) {
            Some(slot) => slot,
            None => {
                let default_heading = category.default_heading();
                groups.push(CategoryGroup::new(category, default_heading));
                named.push(false);
                groups.len() - 1
            }
        };
        if let Some(heading) = heading
            && !named[slot]
        {
            groups[slot].heading = heading;
            named[slot] = true;
        }

        let year = row.year.filter(|y| !y.is_empty());
        groups[slot].add(title, row.details.unwrap_or_default(), year.as_deref());
    }

    for group in &groups {
        debug!(
            category = %group.category,
            records = group.len(),
            "loaded group"
        );
    }
    Ok(Catalog::new(groups))
}
