// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gp-sync operations.
//!
//! Every variant carries a user-facing message; the CLI shows it verbatim.
//! Failures are never retried and carry no transient/permanent distinction.

use thiserror::Error;

/// All possible errors that can occur during a sync exchange.
#[derive(Debug, Error)]
pub enum Error {
    #[error("there are no lists to upload")]
    NothingToUpload,

    #[error("failed to encode lists: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode server response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("server echoed {received} lists but {sent} were uploaded")]
    CountMismatch { sent: usize, received: usize },

    #[error("the server returned no lists")]
    EmptyRemote,
}

/// A specialized Result type for gp-sync operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
