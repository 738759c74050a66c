// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the grors library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'gro init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("quantity must be greater than zero (got {0})")]
    QuantityNotPositive(f64),

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    #[error("unknown attribute '{attr}'\n  hint: valid attributes are: name, category, quantity, unit, tag")]
    UnknownAttribute { attr: String },

    #[error("unknown config key '{key}'\n  hint: valid keys are: server, dark-mode, accent-color")]
    UnknownConfigKey { key: String },

    #[error("invalid boolean '{value}'\n  hint: use on/off, true/false, or 1/0")]
    InvalidBool { value: String },

    #[error("import file contains no lists")]
    EmptyImport,

    #[error(transparent)]
    Core(#[from] gp_core::Error),

    #[error("sync failed: {0}")]
    Sync(#[from] gp_sync::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for grors operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
