// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Planner configuration management.
//!
//! Configuration is stored in `.gro/config.toml` and holds the sync endpoint
//! URL. The dark-mode and accent-color preferences belong to the data and
//! live in the database key-value store instead; see
//! [`gp_core::Preferences`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".gro";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "grocery.db";

/// Default sync endpoint. Both upload and download target this one URL.
pub const DEFAULT_SERVER_URL: &str = "https://prototip.online:8080/";

/// Planner configuration stored in `.gro/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sync endpoint URL.
    #[serde(default = "default_server")]
    pub server: String,
}

fn default_server() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: default_server(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.gro/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.gro/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .gro directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path for a work directory
pub fn get_db_path(work_dir: &Path) -> PathBuf {
    work_dir.join(DB_FILE_NAME)
}

/// Initialize a new .gro directory at the given path
pub fn init_work_dir(path: &Path, server: Option<&str>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config {
        server: server.unwrap_or(DEFAULT_SERVER_URL).to_string(),
    };
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
