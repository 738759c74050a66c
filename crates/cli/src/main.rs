// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use grors::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // GRO_LOG=debug gro sync push  traces the exchange
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GRO_LOG"))
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to '{}': {}", dir, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = grors::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
