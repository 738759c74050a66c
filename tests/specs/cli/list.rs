// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `gro list` and `gro show` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{add_item, create_list, gro, init_temp};
use predicates::prelude::*;

#[test]
fn list_empty_planner() {
    let temp = init_temp();
    gro().arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists yet"));
}

#[test]
fn list_shows_progress_counts() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");
    add_item(&temp, "weekend", "Bread");

    gro().arg("check")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1/2"));
}

#[test]
fn list_json_reports_zero_progress_for_empty_list() {
    let temp = init_temp();
    create_list(&temp, "A");
    add_item(&temp, "A", "Milk");
    add_item(&temp, "A", "Bread");
    create_list(&temp, "B");

    gro().arg("check")
        .arg("A")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success();

    let output = gro()
        .arg("list")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(rows[0]["name"], "A");
    assert_eq!(rows[0]["progress"], 0.5);
    assert_eq!(rows[1]["name"], "B");
    assert_eq!(rows[1]["progress"], 0.0);
}

#[test]
fn list_sorts_by_name_or_date() {
    let temp = init_temp();
    create_list(&temp, "Zebra");
    create_list(&temp, "Apple");

    let by_name = gro()
        .arg("list")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&by_name.stdout).to_string();
    let apple = stdout.find("Apple").unwrap();
    let zebra = stdout.find("Zebra").unwrap();
    assert!(apple < zebra);

    let by_date = gro()
        .arg("list")
        .arg("--sort")
        .arg("date")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&by_date.stdout).to_string();
    let apple = stdout.find("Apple").unwrap();
    let zebra = stdout.find("Zebra").unwrap();
    assert!(zebra < apple);
}

#[test]
fn show_groups_items_by_category() {
    let temp = init_temp();
    create_list(&temp, "Weekend");

    gro().arg("add")
        .arg("weekend")
        .arg("Milk")
        .arg("-c")
        .arg("dairy")
        .current_dir(temp.path())
        .assert()
        .success();
    gro().arg("add")
        .arg("weekend")
        .arg("Apples")
        .arg("-c")
        .arg("produce")
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("show")
        .arg("weekend")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dairy"))
        .stdout(predicate::str::contains("produce"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Apples"));
}

#[test]
fn show_unknown_list_fails() {
    let temp = init_temp();
    gro().arg("show")
        .arg("nothing")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("list not found"));
}
