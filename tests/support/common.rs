#![allow(dead_code)]

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const HEADER: &str = "Titulo,Preco,Rating,Disponibilidade,Categoria,URL_Imagem,URL_Livro";

// Builds snapshot CSV text in the scraper's column layout.
#[derive(Default)]
pub struct SnapshotBuilder {
    rows: Vec<String>,
    bom: bool,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bom(mut self) -> Self {
        self.bom = true;
        self
    }

    pub fn book(self, title: &str, price: &str, rating: &str, category: &str) -> Self {
        let slug = title.to_lowercase().replace(' ', "-");
        let row = format!(
            "{},{price},{rating},In stock,{category},https://books.toscrape.com/media/{slug}.jpg,https://books.toscrape.com/catalogue/{slug}/index.html",
            quote(title)
        );
        self.raw_row(&row)
    }

    pub fn raw_row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.bom {
            out.push('\u{feff}');
        }
        out.push_str(HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    pub fn write(&self) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// The three-book catalog used throughout the docs: two priced Fiction titles
// and a Poetry title whose price does not parse.
pub fn worked_example() -> SnapshotBuilder {
    SnapshotBuilder::new()
        .book("First Fiction", "£10.00", "5", "Fiction")
        .book("Second Fiction", "£20.00", "3", "Fiction")
        .book("Broken Poetry", "bad", "5", "Poetry")
}

// A slice of the real books.toscrape.com listing.
pub fn sample_listing() -> SnapshotBuilder {
    SnapshotBuilder::new()
        .with_bom()
        .book("A Light in the Attic", "£51.77", "3", "Poetry")
        .book("Tipping the Velvet", "£53.74", "1", "Historical Fiction")
        .book("Soumission", "£50.10", "1", "Fiction")
        .book("Sharp Objects", "£47.82", "4", "Mystery")
        .book("Sapiens: A Brief History of Humankind", "£54.23", "5", "History")
        .book("The Requiem Red", "£22.65", "1", "Young Adult")
        .book("The Dirty Little Secrets of Getting Your Dream Job", "£33.34", "4", "Business")
        .book("The Coming Woman: A Novel", "£17.93", "3", "Default")
        .book("The Boys in the Boat", "£22.60", "4", "Default")
        .book("The Black Maria", "£52.15", "1", "Poetry")
        .book("Starving Hearts (Triangular Trade Trilogy, #1)", "£13.99", "2", "Default")
        .book("Shakespeare's Sonnets", "£20.66", "4", "Poetry")
        .book("Set Me Free", "£17.46", "5", "Young Adult")
        .book("Scott Pilgrim's Precious Little Life", "£52.29", "5", "Sequential Art")
        .book("Rip it Up and Start Again", "£35.02", "5", "Music")
        .book("Olio", "£23.88", "1", "Poetry")
        .book("Mesaerion: The Best Science Fiction Stories 1800-1849", "£37.59", "1", "Science Fiction")
        .book("Libertarianism for Beginners", "£51.33", "2", "Politics")
        .book("It's Only the Himalayas", "£45.17", "2", "Travel")
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
