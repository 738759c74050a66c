// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;

use gp_core::{Database, GroceryList};

use super::{insert_as_new, open_db};
use crate::error::{Error, Result};

pub fn run(filepath: &str) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, filepath)
}

/// Internal implementation that accepts db for testing.
///
/// Imported lists are added as new records, like a sync pull; importing the
/// same file twice duplicates its lists.
pub(crate) fn run_impl(db: &mut Database, filepath: &str) -> Result<()> {
    let content = fs::read_to_string(filepath)?;
    let lists: Vec<GroceryList> = serde_json::from_str(&content)?;

    if lists.is_empty() {
        return Err(Error::EmptyImport);
    }

    let count = insert_as_new(db, lists)?;

    let noun = if count == 1 { "list" } else { "lists" };
    println!("Imported {} {} from {}", count, noun, filepath);
    Ok(())
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
