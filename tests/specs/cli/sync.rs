// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `gro sync` and `gro export`/`gro import` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{add_item, create_list, gro, init_temp};
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve exactly one HTTP request with a canned response on a background
/// thread, reading the full request first.
fn serve_once(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    std::thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&request[..header_end]);
                let content_length = headers
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        socket.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}/")
}

#[test]
fn push_with_no_lists_fails_before_the_network() {
    let temp = init_temp();

    gro().arg("sync")
        .arg("push")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no lists to upload"));
}

#[test]
fn push_uploads_and_reports_the_count() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");

    // Echo the exported collection, which is the same wire shape
    let export_path = temp.path().join("lists.json");
    gro().arg("export")
        .arg(export_path.to_str().unwrap())
        .current_dir(temp.path())
        .assert()
        .success();
    let echo = std::fs::read_to_string(&export_path).unwrap();

    let url = serve_once(echo);
    gro().arg("config")
        .arg("set")
        .arg("server")
        .arg(&url)
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("sync")
        .arg("push")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded 1 list"));
}

#[test]
fn pull_adds_downloaded_lists_as_new() {
    let temp = init_temp();

    let body = r#"[{"id":"7f3a39a4-9c6b-4f2e-8a21-0d6f1f4b2c55","name":"Remote","date":"2026-08-01T10:00:00Z","groceryItems":[{"id":"b4c0f6de-2f1a-4f6e-bb3b-5a9f2e6d7c88","name":"Milk","category":"dairy","isActive":true,"quantity":2.0,"unit":"l","dateAdded":"2026-08-01T10:00:00Z","tag":""}]}]"#;
    let url = serve_once(body.to_string());
    gro().arg("config")
        .arg("set")
        .arg("server")
        .arg(&url)
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("sync")
        .arg("pull")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded 1 list"));

    gro().arg("show")
        .arg("Remote")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"));
}

#[test]
fn pull_of_empty_remote_fails_with_message() {
    let temp = init_temp();

    let url = serve_once("[]".to_string());
    gro().arg("config")
        .arg("set")
        .arg("server")
        .arg(&url)
        .current_dir(temp.path())
        .assert()
        .success();

    gro().arg("sync")
        .arg("pull")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no lists"));
}

#[test]
fn export_import_round_trip() {
    let temp = init_temp();
    create_list(&temp, "Weekend");
    add_item(&temp, "weekend", "Milk");

    let path = temp.path().join("lists.json");
    gro().arg("export")
        .arg(path.to_str().unwrap())
        .current_dir(temp.path())
        .assert()
        .success();

    let other = init_temp();
    gro().arg("import")
        .arg(path.to_str().unwrap())
        .current_dir(other.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 list"));

    gro().arg("show")
        .arg("Weekend")
        .current_dir(other.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"));
}
