// End-to-end guard rails for the bookshelf binary.
#[path = "support/common.rs"]
mod common;

use anyhow::{Context, Result};
use common::{path_str, sample_listing, worked_example};
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

fn bookshelf(snapshot: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .arg("--snapshot")
        .arg(path_str(snapshot))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("failed to execute bookshelf")
}

fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout should be JSON")
}

fn stderr_json(output: &Output) -> Result<Value> {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let last = stderr
        .lines()
        .last()
        .context("stderr should carry an error line")?;
    serde_json::from_str(last).with_context(|| format!("stderr was: {stderr}"))
}

#[test]
fn health_reports_counts() -> Result<()> {
    let file = sample_listing().write()?;
    let output = bookshelf(file.path(), &["health"])?;
    assert!(output.status.success());
    let value = stdout_json(&output)?;
    assert_eq!(value["status"], "ok");
    assert_eq!(value["total_books"], 19);
    assert_eq!(value["total_categories"], 13);
    Ok(())
}

#[test]
fn missing_snapshot_is_unavailable() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = bookshelf(&dir.path().join("absent.csv"), &["health"])?;
    assert_eq!(output.status.code(), Some(4));
    let error = stderr_json(&output)?;
    assert_eq!(error["error"], "service_unavailable");
    assert_eq!(error["status"], 503);

    let listing = bookshelf(&dir.path().join("absent.csv"), &["books"])?;
    assert!(listing.status.success());
    assert_eq!(stdout_json(&listing)?, Value::Array(Vec::new()));
    Ok(())
}

#[test]
fn search_prints_matching_books() -> Result<()> {
    let file = worked_example().write()?;
    let output = bookshelf(file.path(), &["search", "--category", "fiction"])?;
    assert!(output.status.success());
    let value = stdout_json(&output)?;
    let ids: Vec<u64> = value
        .as_array()
        .context("array")?
        .iter()
        .filter_map(|b| b["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(value[0]["raw_price"], "£10.00");
    Ok(())
}

#[test]
fn unknown_id_exits_not_found() -> Result<()> {
    let file = worked_example().write()?;
    let output = bookshelf(file.path(), &["book", "99"])?;
    assert_eq!(output.status.code(), Some(2));
    let error = stderr_json(&output)?;
    assert_eq!(error["error"], "not_found");
    assert_eq!(error["status"], 404);
    Ok(())
}

#[test]
fn inverted_price_range_exits_invalid_range() -> Result<()> {
    let file = worked_example().write()?;
    let output = bookshelf(
        file.path(),
        &["price-range", "--min-price", "20", "--max-price", "10"],
    )?;
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let error = stderr_json(&output)?;
    assert_eq!(error["error"], "invalid_range");
    Ok(())
}

#[test]
fn stats_categories_matches_worked_example() -> Result<()> {
    let file = worked_example().write()?;
    let output = bookshelf(file.path(), &["stats", "categories"])?;
    assert!(output.status.success());
    let value = stdout_json(&output)?;
    assert_eq!(value[0]["category"], "Fiction");
    assert_eq!(value[0]["mean_price"], 15.0);
    assert_eq!(value[1]["category"], "Poetry");
    assert!(value[1]["mean_price"].is_null());
    Ok(())
}

#[test]
fn snapshot_path_falls_back_to_env() -> Result<()> {
    let file = worked_example().write()?;
    let output = Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .arg("stats")
        .arg("overview")
        .env("BOOKSHELF_SNAPSHOT", file.path())
        .env_remove("RUST_LOG")
        .output()
        .context("failed to execute bookshelf")?;
    assert!(output.status.success());
    let value = stdout_json(&output)?;
    assert_eq!(value["total_books"], 3);
    assert_eq!(value["mean_price"], 15.0);
    Ok(())
}
