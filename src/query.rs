//! Read-only lookups and filters over a loaded catalog.
//!
//! Every operation borrows the catalog and returns references into it, so
//! results are cheap and the catalog can never be altered through a query.
//! Zero matches on a well-formed query surface as `NotFound`; `list_all` is
//! the only operation that returns an empty result instead.

use crate::catalog::{Book, BookId, Catalog};
use crate::error::{CatalogError, Result};
use crate::price::parse_price;

/// Minimum rating used by `top_rated` when the caller supplies none.
pub const DEFAULT_MIN_RATING: i64 = 5;
/// Upper price bound used when the caller supplies none.
pub const DEFAULT_MAX_PRICE: f64 = 9999.0;

const RATING_BOUNDS: std::ops::RangeInclusive<i64> = 1..=5;

/// Optional title/category criteria; both present means both must match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Case-insensitive exact category name.
    pub category: Option<String>,
}

impl SearchFilter {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            category: None,
        }
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self {
            title: None,
            category: Some(value.into()),
        }
    }

    fn is_unfiltered(&self) -> bool {
        non_empty(&self.title).is_none() && non_empty(&self.category).is_none()
    }
}

/// Inclusive price window in the snapshot's currency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

impl PriceRange {
    fn validate(&self) -> Result<()> {
        for (name, bound) in [("min_price", self.min), ("max_price", self.max)] {
            if bound.is_nan() || bound < 0.0 {
                return Err(CatalogError::invalid_range(format!(
                    "{name} must be a non-negative number, got {bound}"
                )));
            }
        }
        if self.min > self.max {
            return Err(CatalogError::invalid_range(format!(
                "min_price {} is greater than max_price {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Clone, Copy, Debug)]
pub struct QueryEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Every book in snapshot order; empty when nothing was loaded.
    pub fn list_all(&self) -> Vec<&'a Book> {
        self.catalog.books().iter().collect()
    }

    /// Category names in ascending lexicographic order.
    pub fn list_categories(&self) -> Result<Vec<&'a str>> {
        let categories = self.catalog.categories();
        if categories.is_empty() {
            return Err(CatalogError::not_found("no categories in catalog"));
        }
        Ok(categories.iter().map(String::as_str).collect())
    }

    /// Filter by title substring and/or exact category, both ignoring case.
    ///
    /// Empty criteria are treated as absent; with no criteria the full
    /// listing is returned rather than `NotFound`.
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<&'a Book>> {
        if filter.is_unfiltered() {
            return Ok(self.list_all());
        }
        let title = non_empty(&filter.title).map(str::to_lowercase);
        let category = non_empty(&filter.category).map(str::to_lowercase);

        let results: Vec<&Book> = self
            .catalog
            .books()
            .iter()
            .filter(|book| {
                title
                    .as_deref()
                    .is_none_or(|needle| book.title.to_lowercase().contains(needle))
            })
            .filter(|book| {
                category
                    .as_deref()
                    .is_none_or(|wanted| book.category.to_lowercase() == wanted)
            })
            .collect();

        if results.is_empty() {
            return Err(CatalogError::not_found(describe_filter(filter)));
        }
        Ok(results)
    }

    pub fn by_id(&self, id: BookId) -> Result<&'a Book> {
        self.catalog
            .book(id)
            .ok_or_else(|| CatalogError::not_found(format!("book with id {id}")))
    }

    /// Books rated at least `min_rating`, highest first.
    ///
    /// Ties keep snapshot order.
    pub fn top_rated(&self, min_rating: i64) -> Result<Vec<&'a Book>> {
        if !RATING_BOUNDS.contains(&min_rating) {
            return Err(CatalogError::invalid_range(format!(
                "min_rating must be between {} and {}, got {min_rating}",
                RATING_BOUNDS.start(),
                RATING_BOUNDS.end()
            )));
        }
        let mut results: Vec<&Book> = self
            .catalog
            .books()
            .iter()
            .filter(|book| book.rating >= min_rating)
            .collect();
        if results.is_empty() {
            return Err(CatalogError::not_found(format!(
                "books with rating >= {min_rating}"
            )));
        }
        results.sort_by(|a, b| b.rating.cmp(&a.rating));
        Ok(results)
    }

    /// Books whose normalized price falls inside `range`, cheapest first.
    ///
    /// Books with an unparseable price never match. Ties keep snapshot order.
    pub fn price_range(&self, range: &PriceRange) -> Result<Vec<&'a Book>> {
        range.validate()?;
        let mut priced: Vec<(f64, &Book)> = self
            .catalog
            .books()
            .iter()
            .filter_map(|book| parse_price(&book.raw_price).map(|price| (price, book)))
            .filter(|(price, _)| range.contains(*price))
            .collect();
        if priced.is_empty() {
            return Err(CatalogError::not_found(format!(
                "books priced between {} and {}",
                range.min, range.max
            )));
        }
        priced.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(priced.into_iter().map(|(_, book)| book).collect())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn describe_filter(filter: &SearchFilter) -> String {
    let mut parts = Vec::new();
    if let Some(title) = non_empty(&filter.title) {
        parts.push(format!("title containing '{title}'"));
    }
    if let Some(category) = non_empty(&filter.category) {
        parts.push(format!("category '{category}'"));
    }
    format!("books with {}", parts.join(" and "))
}
