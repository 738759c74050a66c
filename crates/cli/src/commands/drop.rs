// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run(list: &str, item: &str) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, list, item)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, list_query: &str, item_query: &str) -> Result<()> {
    let list = db.resolve_list(list_query)?;
    let item = db.resolve_item(&list.id, item_query)?;
    db.delete_item(&item.id)?;

    println!("Dropped '{}' from '{}'", item.name, list.name);
    Ok(())
}

#[cfg(test)]
#[path = "drop_tests.rs"]
mod tests;
