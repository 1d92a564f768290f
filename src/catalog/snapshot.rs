//! CSV snapshot parsing.
//!
//! The scraper writes `utf-8-sig` CSV with Portuguese column names. Parsing is
//! strict about the header (every required column must be present) and lenient
//! about rows: a row with missing or unreadable values is still loaded with
//! field defaults so record ids stay aligned with snapshot row positions.

use crate::catalog::model::{Book, BookId, UNCATEGORIZED};
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

/// Columns the snapshot header must declare; extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Titulo",
    "Preco",
    "Rating",
    "Disponibilidade",
    "Categoria",
    "URL_Imagem",
    "URL_Livro",
];

const UTF8_BOM: char = '\u{feff}';

/// Rating recorded when the snapshot value is missing or not integral.
const DEFAULT_RATING: i64 = 0;

#[derive(Debug, Error)]
pub(crate) enum SnapshotError {
    #[error("reading snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing snapshot: {0}")]
    Csv(#[from] csv::Error),
    #[error("snapshot header missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("snapshot has more rows than assignable ids")]
    TooManyRows,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotRow {
    #[serde(rename = "Titulo")]
    title: Option<String>,
    #[serde(rename = "Preco")]
    price: Option<String>,
    #[serde(rename = "Rating")]
    rating: Option<String>,
    #[serde(rename = "Disponibilidade")]
    availability: Option<String>,
    #[serde(rename = "Categoria")]
    category: Option<String>,
    #[serde(rename = "URL_Imagem")]
    image_url: Option<String>,
    #[serde(rename = "URL_Livro")]
    book_url: Option<String>,
}

impl SnapshotRow {
    fn into_book(self, id: BookId) -> Book {
        let rating = match parse_rating(self.rating.as_deref()) {
            Some(rating) => rating,
            None => {
                tracing::debug!(book_id = %id, raw = ?self.rating, "rating unreadable; using default");
                DEFAULT_RATING
            }
        };
        // Only an empty field is missing; whitespace-only values stay literal.
        let category = match self.category.filter(|c| !c.is_empty()) {
            Some(category) => category,
            None => {
                tracing::debug!(book_id = %id, "category missing; grouping as {UNCATEGORIZED}");
                UNCATEGORIZED.to_string()
            }
        };
        Book {
            id,
            title: self.title.unwrap_or_default(),
            raw_price: self.price.unwrap_or_default(),
            rating,
            availability: self.availability.unwrap_or_default(),
            category,
            image_url: self.image_url.unwrap_or_default(),
            book_url: self.book_url.unwrap_or_default(),
        }
    }
}

/// Parse every snapshot row into a `Book`, assigning ids by row position.
pub(crate) fn read_snapshot<R: Read>(mut reader: R) -> Result<Vec<Book>, SnapshotError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let body = text.strip_prefix(UTF8_BOM).unwrap_or(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(body.as_bytes());

    let header = csv_reader.headers()?.clone();
    validate_header(&header)?;

    let mut books = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let id = u32::try_from(idx + 1)
            .map(BookId)
            .map_err(|_| SnapshotError::TooManyRows)?;
        let mut record = record?;
        // Short rows are padded so the missing trailing fields take defaults.
        while record.len() < header.len() {
            record.push_field("");
        }
        let row: SnapshotRow = record.deserialize(Some(&header))?;
        books.push(row.into_book(id));
    }
    Ok(books)
}

fn validate_header(header: &csv::StringRecord) -> Result<(), SnapshotError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !header.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SnapshotError::MissingColumns(missing))
    }
}

// Integral floats ("4.0") show up when the snapshot passed through a dataframe
// with missing values in the column.
fn parse_rating(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}
