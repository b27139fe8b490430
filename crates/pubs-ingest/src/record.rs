//! Field checks shared by the JSON and CSV readers.

use std::path::Path;

use pubs_model::CategoryTag;

use crate::error::{IngestError, Result};

pub(crate) fn category_tag(path: &Path, record: usize, value: &str) -> Result<CategoryTag> {
    CategoryTag::new(value).map_err(|error| IngestError::InvalidRecord {
        path: path.to_path_buf(),
        record,
        message: error.to_string(),
    })
}

pub(crate) fn checked_title(path: &Path, record: usize, value: &str) -> Result<String> {
    let title = value.trim();
    if title.is_empty() {
        return Err(IngestError::InvalidRecord {
            path: path.to_path_buf(),
            record,
            message: "title is empty".to_string(),
        });
    }
    Ok(title.to_string())
}
