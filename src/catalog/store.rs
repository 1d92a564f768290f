//! Immutable in-memory catalog built once from a snapshot.
//!
//! The catalog keeps records in snapshot order and a derived, deterministic
//! category set. Ids are dense (`1..=N`), which lets `book` resolve an id by
//! position instead of scanning.

use crate::catalog::model::{Book, BookId};
use crate::catalog::snapshot::read_snapshot;
use crate::error::{CatalogError, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq)]
/// Ordered book records plus the set of distinct categories.
pub struct Catalog {
    books: Vec<Book>,
    categories: BTreeSet<String>,
}

impl Catalog {
    /// Catalog with no records; what a failed load leaves behind.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the CSV snapshot at `path`.
    ///
    /// Missing files, unreadable bytes, broken CSV and headers lacking a
    /// required column all surface as `LoadUnavailable`.
    pub fn load(path: &Path) -> Result<Self> {
        let unavailable = |reason: String| CatalogError::LoadUnavailable {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::open(path).map_err(|err| unavailable(err.to_string()))?;
        let books = read_snapshot(file).map_err(|err| unavailable(err.to_string()))?;
        let catalog = Self::from_loaded(books);
        tracing::info!(
            path = %path.display(),
            books = catalog.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a snapshot from any reader. Load failures are reported against
    /// the placeholder path `<reader>`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let books = read_snapshot(reader).map_err(|err| CatalogError::LoadUnavailable {
            path: "<reader>".into(),
            reason: err.to_string(),
        })?;
        Ok(Self::from_loaded(books))
    }

    /// Build a catalog from already-constructed records.
    ///
    /// Ids are reassigned from 1 in the given order so the dense-id invariant
    /// holds regardless of what the caller put in `id`.
    pub fn from_books(books: Vec<Book>) -> Self {
        let books = books
            .into_iter()
            .zip(1u32..)
            .map(|(mut book, id)| {
                book.id = BookId(id);
                book
            })
            .collect();
        Self::from_loaded(books)
    }

    fn from_loaded(books: Vec<Book>) -> Self {
        let categories = books.iter().map(|book| book.category.clone()).collect();
        Self { books, categories }
    }

    /// Records in snapshot order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Distinct categories in ascending order.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Resolve a record by id.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        let idx = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.books.get(idx)
    }
}
