use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid category tag: {0:?}")]
    InvalidCategory(String),
    #[error("unknown sort order: {0:?} (expected year-desc, year-asc or default)")]
    UnknownSortOrder(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
