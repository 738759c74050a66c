// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `gro stats` and `gro config` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{add_item, create_list, gro, init_temp};
use predicates::prelude::*;

#[test]
fn stats_on_a_fresh_planner() {
    let temp = init_temp();
    gro().arg("stats")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No purchases recorded yet"));
}

#[test]
fn stats_orders_by_count_descending() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    for item in ["Milk", "Bread"] {
        add_item(&temp, "weekend", item);
    }
    // bread twice: check, uncheck, check again on a second list
    gro().arg("check")
        .arg("weekend")
        .arg("bread")
        .current_dir(temp.path())
        .assert()
        .success();
    create_list(&temp, "Party");
    add_item(&temp, "party", "Bread");
    gro().arg("check")
        .arg("party")
        .arg("bread")
        .current_dir(temp.path())
        .assert()
        .success();
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
    assert_eq!(rows[0]["name"], "bread");
    assert_eq!(rows[0]["count"], 2);
    assert_eq!(rows[1]["name"], "milk");
}

#[test]
fn stats_honors_the_limit() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    for item in ["Milk", "Bread", "Eggs"] {
        add_item(&temp, "weekend", item);
        gro().arg("check")
            .arg("weekend")
            .arg(item)
            .current_dir(temp.path())
            .assert()
            .success();
    }

    let output = gro()
        .arg("stats")
        .arg("--limit")
        .arg("2")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn config_defaults_and_round_trip() {
    let temp = init_temp();

    gro().arg("config")
        .arg("get")
        .arg("dark-mode")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("on"));
    gro().arg("config")
        .arg("get")
        .arg("accent-color")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("mint"));

    gro().arg("config")
        .arg("set")
        .arg("accent-color")
        .arg("cyan")
        .current_dir(temp.path())
        .assert()
        .success();
    gro().arg("config")
        .arg("get")
        .arg("accent-color")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cyan"));
}

#[test]
fn config_rejects_unknown_key() {
    let temp = init_temp();
    gro().arg("config")
        .arg("get")
        .arg("theme")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}
