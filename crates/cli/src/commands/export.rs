// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{BufWriter, Write};

use gp_core::Database;

use super::open_db;
use crate::error::{Error, Result};

pub fn run(filepath: &str) -> Result<()> {
    if filepath.trim().is_empty() {
        return Err(Error::FieldEmpty {
            field: "Export path",
        });
    }

    let (db, _, _) = open_db()?;
    run_impl(&db, filepath)
}

/// Internal implementation that accepts db for testing.
///
/// The file holds one JSON array of lists in the sync wire shape, so an
/// export is also a valid upload payload.
pub(crate) fn run_impl(db: &Database, filepath: &str) -> Result<()> {
    let lists = db.get_all_lists()?;

    let file = File::create(filepath)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &lists)?;
    writer.flush()?;

    let noun = if lists.len() == 1 { "list" } else { "lists" };
    println!("Exported {} {} to {}", lists.len(), noun, filepath);
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
