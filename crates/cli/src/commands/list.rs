// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use gp_core::{Database, ListSort};

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_list_line;
use crate::error::Result;

/// JSON representation of a list for list output.
#[derive(Serialize)]
struct ListJson {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    items: usize,
    checked: usize,
    progress: f64,
}

pub fn run(sort: &str, format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, sort, format)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, sort: &str, format: OutputFormat) -> Result<()> {
    let sort: ListSort = sort.parse()?;
    let lists = db.list_lists(sort)?;

    match format {
        OutputFormat::Text => {
            if lists.is_empty() {
                println!("No lists yet. Create one with 'gro new <name>'.");
                return Ok(());
            }
            let accent = db.prefs()?.accent_color;
            for list in &lists {
                println!("{}", format_list_line(list, accent));
            }
        }
        OutputFormat::Json => {
            let rows: Vec<ListJson> = lists
                .iter()
                .map(|list| ListJson {
                    id: list.id,
                    name: list.name.clone(),
                    created_at: list.created_at,
                    items: list.items.len(),
                    checked: list.checked_count(),
                    progress: list.progress(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
