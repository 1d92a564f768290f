//! Book catalog wiring.
//!
//! This module wraps the scraped CSV snapshot on disk (by default
//! `data/books_scrape_data.csv`) so the engines can work from a single
//! immutable value. `Catalog` owns the records and the derived category set;
//! `Bookshelf` pairs it with the load outcome so callers can tell "never
//! loaded" apart from "query matched nothing".

pub mod model;
pub mod snapshot;
pub mod state;
pub mod store;

pub use model::{Book, BookId, UNCATEGORIZED};
pub use snapshot::REQUIRED_COLUMNS;
pub use state::{Bookshelf, Health, LoadStatus};
pub use store::Catalog;

/// Default relative path to the scraped snapshot.
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/books_scrape_data.csv";
