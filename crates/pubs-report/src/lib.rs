//! Report generation for publication catalogs.
//!
//! - **BibTeX**: citation export of catalog records
//! - **Listing**: JSON view of the records a projection shows

pub mod bibtex;
pub mod error;
pub mod listing;

pub use bibtex::{BibtexEntry, DEFAULT_BIBTEX_FILE, bibtex_entries, export_bibtex, write_bibtex};
pub use error::{ReportError, Result};
pub use listing::{ListedGroup, ListedPublication, ProjectionReport};
