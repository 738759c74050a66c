// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use gp_core::Database;

use super::open_db;
use crate::error::Result;

pub fn check(list: &str, items: &[String]) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    check_impl(&mut db, list, items)
}

/// Internal implementation that accepts db for testing.
///
/// Checking an item feeds the purchase-history aggregate; checking an
/// already-checked item is a no-op and does not count a second purchase.
pub(crate) fn check_impl(db: &mut Database, list_query: &str, items: &[String]) -> Result<()> {
    let list = db.resolve_list(list_query)?;

    for query in items {
        let item = db.resolve_item(&list.id, query)?;
        if !item.active {
            println!("'{}' is already checked", item.name);
            continue;
        }

        db.record_purchase(&item.name, Utc::now())?;
        db.set_item_active(&item.id, false)?;
        println!("Checked '{}'", item.name);
    }

    Ok(())
}

pub fn uncheck(list: &str, items: &[String]) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    uncheck_impl(&mut db, list, items)
}

/// Internal implementation that accepts db for testing.
///
/// Unchecking never touches the purchase-history aggregate.
pub(crate) fn uncheck_impl(db: &mut Database, list_query: &str, items: &[String]) -> Result<()> {
    let list = db.resolve_list(list_query)?;

    for query in items {
        let item = db.resolve_item(&list.id, query)?;
        if item.active {
            println!("'{}' is not checked", item.name);
            continue;
        }

        db.set_item_active(&item.id, true)?;
        println!("Unchecked '{}'", item.name);
    }

    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
