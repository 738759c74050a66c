// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use gp_core::{Database, GroceryList};

use super::open_db;
use crate::error::Result;
use crate::validate::validate_list_name;

pub fn run(name: &str) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, name)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, name: &str) -> Result<()> {
    let name = validate_list_name(name)?;
    let list = GroceryList::new(name, Utc::now());
    db.create_list(&list)?;

    println!("Created list '{}'", list.name);
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
