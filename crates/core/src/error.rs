// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gp-core operations.

use thiserror::Error;

/// All possible errors that can occur in gp-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("list not found: {0}")]
    ListNotFound(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("ambiguous list name '{query}' matches: {}", matches.join(", "))]
    AmbiguousList {
        query: String,
        matches: Vec<String>,
    },

    #[error("ambiguous item name '{query}' matches: {}", matches.join(", "))]
    AmbiguousItem {
        query: String,
        matches: Vec<String>,
    },

    #[error("invalid category: '{0}'\n  hint: valid categories are: produce, dairy, meat, bakery, frozen, pantry, beverages, household, other")]
    InvalidCategory(String),

    #[error("invalid unit: '{0}'\n  hint: valid units are: none, piece, kg, g, l, ml, pack")]
    InvalidUnit(String),

    #[error("invalid sort key: '{0}'\n  hint: valid keys are: name, date")]
    InvalidListSort(String),

    #[error("invalid sort key: '{0}'\n  hint: valid keys are: name, added")]
    InvalidItemSort(String),

    #[error(
        "invalid accent color: '{0}'\n  hint: valid colors are: mint, cyan, purple, orange, yellow"
    )]
    InvalidAccentColor(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for gp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
