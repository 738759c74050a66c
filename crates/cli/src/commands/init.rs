// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::Database;

use crate::config::{get_db_path, init_work_dir};
use crate::error::Result;

pub fn run(server: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let work_dir = init_work_dir(&cwd, server)?;

    // Open once so the database exists with its schema from the start
    Database::open(&get_db_path(&work_dir))?;

    println!("Initialized grocery planner in {}", work_dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
