// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;

use gp_core::Database;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_purchase_line;
use crate::error::Result;

/// JSON representation of one stats row.
#[derive(Serialize)]
struct StatsRowJson {
    name: String,
    count: i64,
    last_purchased: DateTime<Utc>,
}

pub fn run(limit: usize, format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, limit, format)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, limit: usize, format: OutputFormat) -> Result<()> {
    let records = db.top_purchases(limit)?;

    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No purchases recorded yet.");
                return Ok(());
            }
            let accent = db.prefs()?.accent_color;
            let name_width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
            let max_count = records.first().map(|r| r.count).unwrap_or(0);

            println!("Most purchased products:");
            for record in &records {
                println!(
                    "{}",
                    format_purchase_line(record, name_width, max_count, accent)
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<StatsRowJson> = records
                .iter()
                .map(|r| StatsRowJson {
                    name: r.name.clone(),
                    count: r.count,
                    last_purchased: r.purchased_at,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
