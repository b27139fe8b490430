pub mod catalog;
pub mod category;
pub mod error;
pub mod record;
pub mod view;

pub use catalog::Catalog;
pub use category::CategoryTag;
pub use error::{ModelError, Result};
pub use record::{CategoryGroup, PublicationRecord, parse_year_text};
pub use view::{ALL_CATEGORIES, CategoryFilter, SortOrder, ViewState, normalize_search_term};
