//! Publication records and the groups that hold them.

use serde::{Deserialize, Serialize};

use crate::CategoryTag;

/// A single publication as it appears in the source listing.
///
/// Records are immutable once loaded. The year is kept as its source text;
/// [`PublicationRecord::year_value`] derives the integer used for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Publication title.
    pub title: String,
    /// Author and venue free text.
    #[serde(default)]
    pub details: String,
    /// Raw year text, if the source had one.
    #[serde(default)]
    pub year: Option<String>,
    /// Category of the group the record belongs to.
    pub category: CategoryTag,
}

impl PublicationRecord {
    pub fn new(category: CategoryTag, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: String::new(),
            year: None,
            category,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Integer year used for ordering; missing or unparseable text is 0.
    pub fn year_value(&self) -> i64 {
        self.year.as_deref().map_or(0, parse_year_text)
    }
}

/// Parse the leading integer of a year string.
///
/// Leading whitespace and an optional sign are accepted, then as many ASCII
/// digits as follow. Anything that does not start with a digit yields 0, so
/// `"2021 (accepted)"` is 2021 while `"forthcoming"` is 0.
pub fn parse_year_text(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return 0;
    }
    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative { -value } else { value }
}

/// An ordered cluster of records sharing one category, plus its heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: CategoryTag,
    pub heading: String,
    /// Records in original document order.
    pub records: Vec<PublicationRecord>,
}

impl CategoryGroup {
    pub fn new(category: CategoryTag, heading: impl Into<String>) -> Self {
        Self {
            category,
            heading: heading.into(),
            records: Vec::new(),
        }
    }

    /// Append a record, rewriting its category to the group's tag.
    pub fn push(&mut self, mut record: PublicationRecord) {
        record.category = self.category.clone();
        self.records.push(record);
    }

    /// Build and append a record in one step.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        details: impl Into<String>,
        year: Option<&str>,
    ) -> &mut Self {
        let mut record = PublicationRecord::new(self.category.clone(), title).with_details(details);
        if let Some(year) = year {
            record = record.with_year(year);
        }
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
