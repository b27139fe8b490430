//! Loading the static publication catalog the engine works on.

pub mod csv_catalog;
pub mod error;
pub mod json;
pub mod loader;
mod record;

pub use csv_catalog::parse_csv_catalog;
pub use error::{IngestError, Result};
pub use json::parse_json_catalog;
pub use loader::{
    CATALOG_ENV_VAR, CatalogFormat, load_catalog, resolve_catalog_path, resolve_catalog_path_from,
};
