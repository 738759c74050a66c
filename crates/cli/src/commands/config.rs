// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use gp_core::Database;

use super::open_db;
use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::validate::parse_bool;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    let (mut db, mut config, work_dir) = open_db()?;
    match cmd {
        ConfigCommand::Get { key } => get_impl(&db, &config, key.as_deref()),
        ConfigCommand::Set { key, value } => {
            set_impl(&mut db, &mut config, &work_dir, &key, &value)
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Print one value, or all values when no key is given.
pub(crate) fn get_impl(db: &Database, config: &Config, key: Option<&str>) -> Result<()> {
    let prefs = db.prefs()?;
    match key {
        None => {
            println!("server = {}", config.server);
            println!("dark-mode = {}", on_off(prefs.dark_mode));
            println!("accent-color = {}", prefs.accent_color);
        }
        Some("server") => println!("{}", config.server),
        Some("dark-mode") => println!("{}", on_off(prefs.dark_mode)),
        Some("accent-color") => println!("{}", prefs.accent_color),
        Some(other) => {
            return Err(Error::UnknownConfigKey {
                key: other.to_string(),
            })
        }
    }
    Ok(())
}

/// Set a value. The server URL goes to config.toml; the two preferences go
/// to the database key-value store.
pub(crate) fn set_impl(
    db: &mut Database,
    config: &mut Config,
    work_dir: &Path,
    key: &str,
    value: &str,
) -> Result<()> {
    match key {
        "server" => {
            config.server = value.to_string();
            config.save(work_dir)?;
        }
        "dark-mode" => db.set_dark_mode(parse_bool(value)?)?,
        "accent-color" => db.set_accent_color(value.parse()?)?,
        other => {
            return Err(Error::UnknownConfigKey {
                key: other.to_string(),
            })
        }
    }

    println!("Set {} = {}", key, value);
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
