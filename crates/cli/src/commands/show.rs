// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::{Category, Database, GroceryItem, ItemSort};

use super::open_db;
use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_item_lines;
use crate::error::Result;

pub fn run(list: &str, flat: bool, sort: &str, format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, list, flat, sort, format)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    query: &str,
    flat: bool,
    sort: &str,
    format: OutputFormat,
) -> Result<()> {
    let list = db.resolve_list(query)?;

    match format {
        OutputFormat::Json => {
            // Full wire shape, same as export and sync
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }
        OutputFormat::Text => {}
    }

    let accent = db.prefs()?.accent_color;
    println!(
        "{}  {}/{}",
        list.name,
        list.checked_count(),
        list.items.len()
    );

    if list.items.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

    if flat {
        let sort: ItemSort = sort.parse()?;
        let mut items = list.items.clone();
        match sort {
            ItemSort::Name => {
                items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            ItemSort::Added => items.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        }
        for item in &items {
            for line in format_item_lines(item, accent) {
                println!("{}", line);
            }
        }
        return Ok(());
    }

    // Default view: items grouped by category, in store-walk order
    for category in Category::all() {
        let group: Vec<&GroceryItem> = list
            .items
            .iter()
            .filter(|i| i.category == category)
            .collect();
        if group.is_empty() {
            continue;
        }
        println!();
        println!("{}", colors::header(category.as_str()));
        for item in group {
            for line in format_item_lines(item, accent) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
