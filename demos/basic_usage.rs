// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the smartcfg crate.
//!
//! This example demonstrates:
//! - Loading a document with `!env`, `!text`, `!yaml` and `!IN_MODE` tags
//! - Switching the active mode through an environment variable
//! - Querying values with dotted paths and typed helpers
//! - Lazy loading with `SmartConfig`
//!
//! To run this example:
//! ```bash
//! # Pick the mode (defaults to "development")
//! export APP_MODE="production"
//!
//! # Run the example
//! cargo run --example basic_usage
//! ```

use serde::Deserialize;
use smartcfg::prelude::*;
use std::fs;

const DOCUMENT: &str = r#"
_mode: !env APP_MODE
_modes: [development, production]

app:
  name: demo
  banner: !text banner.txt

database: !IN_MODE
  development:
    host: localhost
    port: 5432
  production: !yaml [databases.yaml, production]

workers: !IN_MODE {development: 1, production: 8}
"#;

#[derive(Debug, Deserialize)]
struct Database {
    host: String,
    port: u16,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    if std::env::var("APP_MODE").is_err() {
        std::env::set_var("APP_MODE", "development");
    }

    println!("=== smartcfg: Basic Usage ===\n");

    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("banner.txt"), "\n  Welcome to the demo!\n")?;
    fs::write(
        dir.path().join("databases.yaml"),
        "production:\n  host: db.internal\n  port: 6432\n",
    )?;
    fs::write(dir.path().join("config.yaml"), DOCUMENT)?;

    // Example 1: eager loading
    println!("--- Example 1: Eager Loading ---");
    let config = Config::new(DOCUMENT, dir.path())?;
    println!("Active mode: {}", config.mode().unwrap_or("<none>"));
    println!("app.banner = {}", config.query_str("app.banner")?);
    println!("workers = {}", config.query_i64("workers")?);

    let database: Database = config.query_as("database")?;
    println!("database = {:?}\n", database);

    // Example 2: missing paths
    println!("--- Example 2: Missing Paths ---");
    match config.query("database.credentials.user") {
        Ok(value) => println!("found: {}", value),
        Err(e) => println!("✗ {}\n", e),
    }

    // Example 3: lazy loading
    println!("--- Example 3: Lazy Loading ---");
    let lazy = SmartConfig::new(dir.path().join("config.yaml"));
    println!("Loaded before first query: {}", lazy.is_loaded());
    println!("app.name = {}", lazy.query_str("app.name")?);
    println!("Loaded after first query: {}", lazy.is_loaded());
    println!("Whole document: {}", lazy.config()?.root());

    Ok(())
}
