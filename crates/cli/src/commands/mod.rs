// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod check;
pub mod config;
pub mod drop;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod new;
pub mod remove;
pub mod rename;
pub mod show;
pub mod stats;
pub mod sync;

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use gp_core::{Database, GroceryList};
use uuid::Uuid;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir);
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// Insert lists as brand-new records.
///
/// Downloads and imports never deduplicate against existing lists; the
/// content is kept verbatim but every list and item gets a fresh id, so
/// pulling twice duplicates the collection.
pub(crate) fn insert_as_new(db: &mut Database, mut lists: Vec<GroceryList>) -> Result<usize> {
    let count = lists.len();
    for list in &mut lists {
        list.id = Uuid::new_v4();
        for item in &mut list.items {
            item.id = Uuid::new_v4();
        }
        db.create_list(list)?;
    }
    Ok(count)
}
