//! Error taxonomy for catalog loading and queries.
//!
//! Each variant is a condition the serving layer maps to its own response.
//! Unparseable prices are not represented here: `parse_price` returns `None`
//! and callers skip the record wherever a number is required.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by the catalog store and the query/stats engines.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The snapshot is missing or could not be parsed; the catalog stays empty.
    #[error("snapshot {} unavailable: {reason}", .path.display())]
    LoadUnavailable {
        /// Snapshot location that was attempted.
        path: PathBuf,
        /// Description of the I/O or format failure.
        reason: String,
    },

    /// An operation that needs data ran against an empty catalog.
    #[error("catalog not loaded")]
    ServiceUnavailable,

    /// A well-formed query matched nothing.
    #[error("not found: {what}")]
    NotFound {
        /// Description of what was looked up.
        what: String,
    },

    /// Caller-supplied bounds are inconsistent or out of domain.
    #[error("invalid range: {reason}")]
    InvalidRange {
        /// Which bound was rejected and why.
        reason: String,
    },
}

impl CatalogError {
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        CatalogError::NotFound { what: what.into() }
    }

    pub(crate) fn invalid_range(reason: impl Into<String>) -> Self {
        CatalogError::InvalidRange {
            reason: reason.into(),
        }
    }

    /// Stable tag for machine-readable error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::LoadUnavailable { .. } => "load_unavailable",
            CatalogError::ServiceUnavailable => "service_unavailable",
            CatalogError::NotFound { .. } => "not_found",
            CatalogError::InvalidRange { .. } => "invalid_range",
        }
    }

    /// HTTP status a serving layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::LoadUnavailable { .. } | CatalogError::ServiceUnavailable => 503,
            CatalogError::NotFound { .. } => 404,
            CatalogError::InvalidRange { .. } => 400,
        }
    }
}
