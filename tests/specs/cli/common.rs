// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for gro CLI specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

pub fn gro() -> Command {
    cargo_bin_cmd!("gro")
}

/// Create a temp directory with an initialized planner.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    gro().arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Create a list in an initialized planner.
pub fn create_list(temp: &TempDir, name: &str) {
    gro().arg("new")
        .arg(name)
        .current_dir(temp.path())
        .assert()
        .success();
}

/// Add an item to a list with default fields.
pub fn add_item(temp: &TempDir, list: &str, item: &str) {
    gro().arg("add")
        .arg(list)
        .arg(item)
        .current_dir(temp.path())
        .assert()
        .success();
}
