// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gp-sync: HTTP sync client for the gro grocery planner.
//!
//! The exchange is a stateless full replace: [`SyncClient::upload`] POSTs the
//! entire local list collection as one JSON array and checks the server's
//! echo by count; [`SyncClient::download`] GETs the entire remote collection
//! for the caller to insert as new records. There is no diffing, no conflict
//! resolution, and no retry.

mod client;
mod error;

pub use client::SyncClient;
pub use error::{Error, Result};
