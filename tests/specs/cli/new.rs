// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `gro new` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{create_list, gro, init_temp};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn new_creates_a_list() {
    let temp = init_temp();

    gro().arg("new")
        .arg("Weekend")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created list 'Weekend'"));

    gro().arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend"));
}

#[test]
fn new_rejects_blank_name() {
    let temp = init_temp();

    gro().arg("new")
        .arg("   ")
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn new_outside_a_planner_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    gro().arg("new")
        .arg("Weekend")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gro init"));
}

#[test]
fn rename_edits_the_name_in_place() {
    let temp = init_temp();
    create_list(&temp, "Weekend");

    gro().arg("rename")
        .arg("weekend")
        .arg("Groceries")
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Weekend").not());
}

#[test]
fn rm_deletes_the_list() {
    let temp = init_temp();
    create_list(&temp, "Weekend");

    gro().arg("rm")
        .arg("weekend")
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists yet"));
}
