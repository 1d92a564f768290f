//! Read-only query and statistics engine over a scraped book catalog.
//!
//! A CSV snapshot is loaded once into an immutable [`Catalog`], wrapped in a
//! [`Bookshelf`] that remembers whether the load succeeded. [`QueryEngine`]
//! answers lookups and filters, [`StatsEngine`] computes aggregates, and every
//! failure a serving layer must distinguish is a [`CatalogError`] variant.

pub mod catalog;
pub mod error;
pub mod price;
pub mod query;
pub mod stats;

pub use catalog::{
    Book, BookId, Bookshelf, Catalog, DEFAULT_SNAPSHOT_PATH, Health, LoadStatus, UNCATEGORIZED,
};
pub use error::{CatalogError, Result};
pub use price::{parse_price, round_to_cents};
pub use query::{DEFAULT_MAX_PRICE, DEFAULT_MIN_RATING, PriceRange, QueryEngine, SearchFilter};
pub use stats::{CategoryStats, RatingDistribution, StatsEngine, StatsOverview};

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the snapshot file.
pub const ENV_SNAPSHOT_PATH: &str = "BOOKSHELF_SNAPSHOT";

/// Resolve the snapshot location.
///
/// Precedence: explicit override, then `BOOKSHELF_SNAPSHOT` when set and
/// non-empty, then [`DEFAULT_SNAPSHOT_PATH`] relative to the working directory.
pub fn resolve_snapshot_path(cli_override: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    if let Some(from_env) = env_non_empty(ENV_SNAPSHOT_PATH) {
        return PathBuf::from(from_env);
    }
    PathBuf::from(DEFAULT_SNAPSHOT_PATH)
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
