// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use gp_core::{Database, GroceryItem};

use super::open_db;
use crate::error::Result;
use crate::validate::{validate_item_name, validate_quantity, validate_tag};

pub fn run(
    list: &str,
    name: &str,
    category: Option<&str>,
    quantity: Option<f64>,
    unit: Option<&str>,
    tag: Option<&str>,
) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, list, name, category, quantity, unit, tag)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    list_query: &str,
    name: &str,
    category: Option<&str>,
    quantity: Option<f64>,
    unit: Option<&str>,
    tag: Option<&str>,
) -> Result<()> {
    let name = validate_item_name(name)?;
    let list = db.resolve_list(list_query)?;

    let mut item = GroceryItem::new(name, Utc::now());
    if let Some(c) = category {
        item.category = c.parse()?;
    }
    if let Some(q) = quantity {
        item.quantity = validate_quantity(q)?;
    }
    if let Some(u) = unit {
        item.unit = u.parse()?;
    }
    if let Some(t) = tag {
        item.tag = validate_tag(t)?;
    }

    db.add_item(&list.id, &item)?;

    println!("Added '{}' to '{}'", item.name, list.name);
    Ok(())
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
