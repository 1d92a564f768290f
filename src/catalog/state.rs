//! Process-wide catalog state established once at startup.

use crate::catalog::store::Catalog;
use crate::error::{CatalogError, Result};
use crate::query::QueryEngine;
use crate::stats::StatsEngine;
use serde::Serialize;
use std::path::Path;

/// Outcome of the one-time snapshot load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    Loaded,
    /// The snapshot could not be read; the catalog is empty.
    Unavailable { reason: String },
}

/// Readiness summary for the serving layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub total_books: usize,
    pub total_categories: usize,
}

/// The loaded catalog plus how it came to be.
///
/// Built once before any query runs and never mutated afterwards, so a shared
/// reference can be handed to any number of concurrent readers.
#[derive(Clone, Debug)]
pub struct Bookshelf {
    catalog: Catalog,
    status: LoadStatus,
}

impl Bookshelf {
    /// Load the snapshot, falling back to an empty catalog on failure.
    pub fn open(path: &Path) -> Self {
        match Catalog::load(path) {
            Ok(catalog) => Self::from_catalog(catalog),
            Err(err) => {
                tracing::warn!(error = %err, "starting with an empty catalog");
                Self {
                    catalog: Catalog::empty(),
                    status: LoadStatus::Unavailable {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            status: LoadStatus::Loaded,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.catalog)
    }

    pub fn stats(&self) -> StatsEngine<'_> {
        StatsEngine::new(&self.catalog)
    }

    /// Report readiness; an empty catalog is not ready regardless of status.
    pub fn health(&self) -> Result<Health> {
        if self.catalog.is_empty() {
            return Err(CatalogError::ServiceUnavailable);
        }
        Ok(Health {
            status: "ok",
            total_books: self.catalog.len(),
            total_categories: self.catalog.categories().len(),
        })
    }
}
