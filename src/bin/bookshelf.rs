//! Command-line front end for the book catalog.
//!
//! Each invocation loads the snapshot once, runs a single operation and prints
//! the result as JSON on stdout. Catalog errors are reported as a JSON object
//! on stderr and mapped to distinct exit codes so scripts can tell "nothing
//! matched" apart from "bad input" and "catalog not ready".
//!
//! Usage:
//!   bookshelf --snapshot data/books_scrape_data.csv health
//!   bookshelf search --title attic --category poetry
//!   bookshelf price-range --min-price 10 --max-price 20
//!   bookshelf stats categories

use anyhow::{Context, Result};
use bookshelf::{
    BookId, Bookshelf, CatalogError, DEFAULT_MAX_PRICE, DEFAULT_MIN_RATING, PriceRange,
    SearchFilter, resolve_snapshot_path,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;
const EXIT_INVALID_RANGE: i32 = 3;
const EXIT_UNAVAILABLE: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Query and summarize a scraped book catalog snapshot")]
struct Cli {
    /// Snapshot CSV path (or set BOOKSHELF_SNAPSHOT).
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
    /// Log load details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether the catalog is loaded, with record and category counts.
    Health,
    /// List category names in ascending order.
    Categories,
    /// List every book in snapshot order.
    Books,
    /// Filter by title substring and/or exact category (case-insensitive).
    Search {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Books rated at least --min-rating, highest first.
    TopRated {
        #[arg(long, default_value_t = DEFAULT_MIN_RATING, allow_negative_numbers = true)]
        min_rating: i64,
    },
    /// Books priced inside an inclusive window, cheapest first.
    PriceRange {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min_price: f64,
        #[arg(long, default_value_t = DEFAULT_MAX_PRICE, allow_negative_numbers = true)]
        max_price: f64,
    },
    /// Show a single book by id.
    Book { id: u32 },
    /// Aggregate statistics.
    Stats {
        #[command(subcommand)]
        view: StatsView,
    },
}

#[derive(Subcommand, Debug)]
enum StatsView {
    /// Total books, mean price and rating distribution.
    Overview,
    /// Count and price summary per category.
    Categories,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        let code = match err.downcast_ref::<CatalogError>() {
            Some(catalog_err) => {
                report_catalog_error(catalog_err);
                exit_code(catalog_err)
            }
            None => {
                eprintln!("{err:#}");
                EXIT_FAILURE
            }
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let snapshot_path = resolve_snapshot_path(cli.snapshot.as_deref());
    let shelf = Bookshelf::open(&snapshot_path);
    let query = shelf.query();
    let stats = shelf.stats();

    match cli.command {
        Command::Health => print_json(&shelf.health()?),
        Command::Categories => print_json(&query.list_categories()?),
        Command::Books => print_json(&query.list_all()),
        Command::Search { title, category } => {
            print_json(&query.search(&SearchFilter { title, category })?)
        }
        Command::TopRated { min_rating } => print_json(&query.top_rated(min_rating)?),
        Command::PriceRange {
            min_price,
            max_price,
        } => print_json(&query.price_range(&PriceRange {
            min: min_price,
            max: max_price,
        })?),
        Command::Book { id } => print_json(query.by_id(BookId(id))?),
        Command::Stats {
            view: StatsView::Overview,
        } => print_json(&stats.overview()?),
        Command::Stats {
            view: StatsView::Categories,
        } => print_json(&stats.by_category()?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serializing result")?;
    println!("{rendered}");
    Ok(())
}

fn report_catalog_error(err: &CatalogError) {
    let body = json!({
        "error": err.kind(),
        "status": err.status_code(),
        "message": err.to_string(),
    });
    eprintln!("{body}");
}

fn exit_code(err: &CatalogError) -> i32 {
    match err {
        CatalogError::NotFound { .. } => EXIT_NOT_FOUND,
        CatalogError::InvalidRange { .. } => EXIT_INVALID_RANGE,
        CatalogError::ServiceUnavailable | CatalogError::LoadUnavailable { .. } => {
            EXIT_UNAVAILABLE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
