// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::Database;

use super::open_db;
use crate::error::{Error, Result};
use crate::validate::{validate_item_name, validate_quantity, validate_tag};

pub fn run(list: &str, item: &str, attr: &str, value: &str) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    run_impl(&mut db, list, item, attr, value)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    list_query: &str,
    item_query: &str,
    attr: &str,
    value: &str,
) -> Result<()> {
    let list = db.resolve_list(list_query)?;
    let mut item = db.resolve_item(&list.id, item_query)?;

    let attr = attr.to_lowercase();
    match attr.as_str() {
        "name" => item.name = validate_item_name(value)?,
        "category" => item.category = value.parse()?,
        "quantity" => {
            let quantity: f64 = value
                .parse()
                .map_err(|_| Error::InvalidQuantity(value.to_string()))?;
            item.quantity = validate_quantity(quantity)?;
        }
        "unit" => item.unit = value.parse()?,
        "tag" => item.tag = validate_tag(value)?,
        _ => {
            return Err(Error::UnknownAttribute {
                attr: attr.to_string(),
            })
        }
    }

    db.update_item(&item)?;

    println!("Updated {} of '{}'", attr, item.name);
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
