// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `gro check` and `gro uncheck` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{add_item, create_list, gro, init_temp};
use predicates::prelude::*;

#[test]
fn check_marks_the_item() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");

    gro().arg("check")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 'Milk'"));

    gro().arg("show")
        .arg("weekend")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"));
}

#[test]
fn uncheck_restores_the_item() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");

    gro().arg("check")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success();
    gro().arg("uncheck")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchecked 'Milk'"));

    gro().arg("show")
        .arg("weekend")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ]"));
}

#[test]
fn checking_feeds_the_purchase_stats() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");

    gro().arg("check")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success();

    let output = gro()
        .arg("stats")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["name"], "milk");
    assert_eq!(rows[0]["count"], 1);
}

#[test]
fn repurchasing_increments_the_same_record() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");
    create_list(&temp, "Party");
    add_item(&temp, "party", "MILK");

    gro().arg("check")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success();
    gro().arg("check")
        .arg("party")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .success();

    let output = gro()
        .arg("stats")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // one record, case-insensitive, count incremented
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["count"], 2);
}

#[test]
fn check_unknown_item_fails() {
    let temp = init_temp();
    create_list(&temp, "Weekend");

    gro().arg("check")
        .arg("weekend")
        .arg("milk")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found"));
}
