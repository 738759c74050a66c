// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! grors - grocery planner library for the `gro` CLI.
//!
//! This crate provides the command layer of the `gro` tool, a grocery-list
//! planner that stores data in a SQLite database and can sync the full list
//! collection with a remote server.
//!
//! # Main Components
//!
//! - [`Config`] - Planner configuration (sync endpoint URL)
//! - [`run`] - Command dispatch, the entry point for library users
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.gro/` directory, then open the
//! database:
//!
//! ```rust,ignore
//! use grors::{find_work_dir, get_db_path, init_work_dir, Config};
//! use gp_core::Database;
//!
//! // Initialize a new planner
//! let work_dir = init_work_dir(Path::new("."), None)?;
//!
//! // Later, find and open an existing planner
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir))?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod help;
mod validate;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat, SyncCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { server } => commands::init::run(server.as_deref()),
        Command::New { name } => commands::new::run(&name),
        Command::List { sort, output } => commands::list::run(&sort, output),
        Command::Show {
            list,
            flat,
            sort,
            output,
        } => commands::show::run(&list, flat, &sort, output),
        Command::Rename { list, name } => commands::rename::run(&list, &name),
        Command::Rm { list } => commands::remove::run(&list),
        Command::Add {
            list,
            name,
            category,
            quantity,
            unit,
            tag,
        } => commands::add::run(
            &list,
            &name,
            category.as_deref(),
            quantity,
            unit.as_deref(),
            tag.as_deref(),
        ),
        Command::Edit {
            list,
            item,
            attr,
            value,
        } => commands::edit::run(&list, &item, &attr, &value),
        Command::Drop { list, item } => commands::drop::run(&list, &item),
        Command::Check { list, items } => commands::check::check(&list, &items),
        Command::Uncheck { list, items } => commands::check::uncheck(&list, &items),
        Command::Stats { limit, output } => commands::stats::run(limit, output),
        Command::Sync(cmd) => match cmd {
            SyncCommand::Push => commands::sync::push(),
            SyncCommand::Pull => commands::sync::pull(),
        },
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Export { filepath } => commands::export::run(&filepath),
        Command::Import { filepath } => commands::import::run(&filepath),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "gro", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
