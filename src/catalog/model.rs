use serde::Serialize;
use std::fmt;

/// Category assigned to snapshot rows that carry no `Categoria` value.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Position-derived identifier; the first snapshot row is `BookId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog record as loaded from the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Currency string exactly as scraped, e.g. `£51.77`.
    pub raw_price: String,
    /// Star rating; 1-5 in practice but passed through unchecked.
    pub rating: i64,
    pub availability: String,
    pub category: String,
    pub image_url: String,
    pub book_url: String,
}

impl Book {
    /// Normalized price, or `None` when `raw_price` is not numeric.
    pub fn price(&self) -> Option<f64> {
        crate::price::parse_price(&self.raw_price)
    }
}
