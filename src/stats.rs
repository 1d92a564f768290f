//! Aggregate statistics over the catalog.
//!
//! Prices go through `parse_price`; books whose price does not normalize still
//! count toward totals but are left out of every price aggregate. All reported
//! prices are rounded to cents.

use crate::catalog::{Book, Catalog};
use crate::error::{CatalogError, Result};
use crate::price::{parse_price, round_to_cents};
use serde::Serialize;
use std::collections::BTreeMap;

/// Book counts per star rating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RatingDistribution {
    pub rating_1: usize,
    pub rating_2: usize,
    pub rating_3: usize,
    pub rating_4: usize,
    pub rating_5: usize,
}

impl RatingDistribution {
    // Returns false when `rating` has no bucket.
    fn record(&mut self, rating: i64) -> bool {
        let bucket = match rating {
            1 => &mut self.rating_1,
            2 => &mut self.rating_2,
            3 => &mut self.rating_3,
            4 => &mut self.rating_4,
            5 => &mut self.rating_5,
            _ => return false,
        };
        *bucket += 1;
        true
    }

    pub fn total(&self) -> usize {
        self.rating_1 + self.rating_2 + self.rating_3 + self.rating_4 + self.rating_5
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsOverview {
    pub total_books: usize,
    /// `None` when no price in the catalog normalizes.
    pub mean_price: Option<f64>,
    pub rating_distribution: RatingDistribution,
    /// Books whose rating falls outside 1-5 and so has no bucket.
    pub out_of_range_ratings: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub total_books: usize,
    pub mean_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default)]
struct PriceSummary {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl PriceSummary {
    fn from_books<'b>(books: impl IntoIterator<Item = &'b Book>) -> Self {
        books
            .into_iter()
            .filter_map(|book| parse_price(&book.raw_price))
            .fold(Self::default(), |mut acc, price| {
                if acc.count == 0 {
                    acc.min = price;
                    acc.max = price;
                } else {
                    acc.min = acc.min.min(price);
                    acc.max = acc.max.max(price);
                }
                acc.count += 1;
                acc.sum += price;
                acc
            })
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| round_to_cents(self.sum / self.count as f64))
    }

    fn min(&self) -> Option<f64> {
        (self.count > 0).then(|| round_to_cents(self.min))
    }

    fn max(&self) -> Option<f64> {
        (self.count > 0).then(|| round_to_cents(self.max))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StatsEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> StatsEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn require_loaded(&self) -> Result<&'a [Book]> {
        if self.catalog.is_empty() {
            return Err(CatalogError::ServiceUnavailable);
        }
        Ok(self.catalog.books())
    }

    /// Totals, mean price and rating histogram for the whole catalog.
    pub fn overview(&self) -> Result<StatsOverview> {
        let books = self.require_loaded()?;
        let mut rating_distribution = RatingDistribution::default();
        let mut out_of_range_ratings = 0;
        for book in books {
            if !rating_distribution.record(book.rating) {
                out_of_range_ratings += 1;
            }
        }
        Ok(StatsOverview {
            total_books: books.len(),
            mean_price: PriceSummary::from_books(books).mean(),
            rating_distribution,
            out_of_range_ratings,
        })
    }

    /// Per-category counts and price aggregates, ordered by category name.
    ///
    /// Grouping uses the literal category value, so names differing only in
    /// case are reported separately.
    pub fn by_category(&self) -> Result<Vec<CategoryStats>> {
        let books = self.require_loaded()?;
        let mut groups: BTreeMap<&str, Vec<&Book>> = BTreeMap::new();
        for book in books {
            groups.entry(book.category.as_str()).or_default().push(book);
        }
        Ok(groups
            .into_iter()
            .map(|(category, members)| {
                let prices = PriceSummary::from_books(members.iter().copied());
                CategoryStats {
                    category: category.to_string(),
                    total_books: members.len(),
                    mean_price: prices.mean(),
                    min_price: prices.min(),
                    max_price: prices.max(),
                }
            })
            .collect())
    }
}
