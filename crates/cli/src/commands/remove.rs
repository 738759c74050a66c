// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run(list: &str) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, list)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, query: &str) -> Result<()> {
    let list = db.resolve_list(query)?;
    db.delete_list(&list.id)?;

    let noun = if list.items.len() == 1 { "item" } else { "items" };
    println!(
        "Deleted list '{}' and {} {}",
        list.name,
        list.items.len(),
        noun
    );
    Ok(())
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
