//! BibTeX export of catalog records.
//!
//! Entries are derived from the free-text details line, so the result is a
//! best-effort citation list rather than a faithful bibliography:
//!
//! - authors: text before the first `(`, or before the first `.` when the
//!   details have no parenthesis;
//! - venue: text after `In ` up to the next `.`, with an `<em>` wrapper
//!   removed; `Unknown Venue` otherwise;
//! - key: first author's surname chunk + year + first title word.
//!
//! Records without a year are skipped.

use std::path::Path;

use tracing::info;

use pubs_model::PublicationRecord;

use crate::error::{ReportError, Result};

/// File name used when no output path is given.
pub const DEFAULT_BIBTEX_FILE: &str = "publications.bib";

const UNKNOWN_VENUE: &str = "Unknown Venue";
const NOTE: &str = "Details extracted from publication list";

/// A single `@article` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibtexEntry {
    pub cite_key: String,
    pub author: String,
    pub title: String,
    pub year: String,
    pub journal: String,
}

impl BibtexEntry {
    /// Build an entry, or `None` when the record has no year or title.
    pub fn from_record(record: &PublicationRecord) -> Option<Self> {
        let year = record.year.as_deref().map(str::trim).filter(|y| !y.is_empty())?;
        let title = record.title.trim();
        if title.is_empty() {
            return None;
        }
        let details = record.details.trim();
        let author = extract_authors(details);
        let journal = extract_venue(details).unwrap_or_else(|| UNKNOWN_VENUE.to_string());
        let cite_key = format!("{}{}{}", first_author_key(&author), year, first_title_word(title));
        Some(Self {
            cite_key,
            author,
            title: title.to_string(),
            year: year.to_string(),
            journal,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "@article{{{key},\n  author = {{{author}}},\n  title = {{{title}}},\n  \
             year = {{{year}}},\n  journal = {{{journal}}},\n  note = {{{note}}}\n}}\n\n",
            key = self.cite_key,
            author = self.author,
            title = self.title,
            year = self.year,
            journal = self.journal,
            note = NOTE,
        )
    }
}

/// Entries for every exportable record, in the order given. Records
/// without a year or title are skipped.
pub fn bibtex_entries<'a, I>(records: I) -> Vec<BibtexEntry>
where
    I: IntoIterator<Item = &'a PublicationRecord>,
{
    records
        .into_iter()
        .filter_map(BibtexEntry::from_record)
        .collect()
}

fn render_entries(entries: &[BibtexEntry]) -> String {
    entries.iter().map(BibtexEntry::render).collect()
}

/// Render every exportable record, in the order given.
pub fn export_bibtex<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a PublicationRecord>,
{
    render_entries(&bibtex_entries(records))
}

/// Write [`export_bibtex`] output to `path`. Returns the number of entries.
pub fn write_bibtex<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a PublicationRecord>,
{
    let entries = bibtex_entries(records);
    std::fs::write(path, render_entries(&entries)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), entries = entries.len(), "bibtex written");
    Ok(entries.len())
}

fn extract_authors(details: &str) -> String {
    if let Some(index) = details.find('(') {
        let head = details[..index].trim();
        if !head.is_empty() {
            return head.to_string();
        }
    }
    details.split('.').next().unwrap_or_default().trim().to_string()
}

fn extract_venue(details: &str) -> Option<String> {
    let mut from = 0;
    while let Some(offset) = details[from..].find("In ") {
        let start = from + offset;
        from = start + 3;
        let at_word_start = details[..start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if !at_word_start {
            continue;
        }
        let rest = details[from..].trim_start();
        let venue = match rest.strip_prefix("<em>") {
            Some(inner) => inner.split("</em>").next(),
            None => rest.split('.').next(),
        };
        if let Some(venue) = venue.map(str::trim).filter(|v| !v.is_empty()) {
            return Some(venue.to_string());
        }
    }
    None
}

fn first_author_key(authors: &str) -> String {
    authors
        .split(',')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect()
}

fn first_title_word(title: &str) -> String {
    title
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}
