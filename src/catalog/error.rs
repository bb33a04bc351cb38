//! Failure kinds for loading a body catalog

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown system: {0}")]
    UnknownSystem(String),
    #[error("malformed catalog data: {0}")]
    Format(String),
    #[error("ephemeris retrieval failed: {0}")]
    Retrieval(String),
}

impl CatalogError {
    /// Transport/service failures, as opposed to bad keys or bad data.
    /// Callers keep their current state on these.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, CatalogError::Retrieval(_))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
