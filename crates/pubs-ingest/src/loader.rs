//! Catalog file discovery and format dispatch.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::info;

use pubs_model::Catalog;

use crate::csv_catalog::parse_csv_catalog;
use crate::error::{IngestError, Result};
use crate::json::parse_json_catalog;

/// Environment variable naming the default catalog file.
pub const CATALOG_ENV_VAR: &str = "PUBS_CATALOG";

/// Supported catalog encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    /// Detect the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(CatalogFormat::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(CatalogFormat::Csv)
        } else {
            None
        }
    }
}

/// Pick the catalog path: an explicit path wins, then `PUBS_CATALOG`.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_catalog_path_from(explicit, std::env::var_os(CATALOG_ENV_VAR).map(PathBuf::from))
}

/// Same as [`resolve_catalog_path`] with the environment value supplied.
pub fn resolve_catalog_path_from(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    from_env
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(IngestError::NoCatalog {
            env_var: CATALOG_ENV_VAR,
        })
}

/// Load a catalog from a `.json` or `.csv` file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let catalog = match format {
        CatalogFormat::Json => {
            let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_json_catalog(path, &contents)?
        }
        CatalogFormat::Csv => {
            let file = File::open(path).map_err(|source| IngestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_csv_catalog(path, file)?
        }
    };
    info!(
        path = %path.display(),
        groups = catalog.groups.len(),
        records = catalog.record_count(),
        "catalog loaded"
    );
    Ok(catalog)
}
