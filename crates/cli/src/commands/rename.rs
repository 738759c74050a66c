// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::Database;

use super::open_db;
use crate::error::Result;
use crate::validate::validate_list_name;

pub fn run(list: &str, name: &str) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, list, name)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, query: &str, name: &str) -> Result<()> {
    let name = validate_list_name(name)?;
    let list = db.resolve_list(query)?;
    db.rename_list(&list.id, &name)?;

    println!("Renamed '{}' to '{}'", list.name, name);
    Ok(())
}

#[cfg(test)]
#[path = "rename_tests.rs"]
mod tests;
