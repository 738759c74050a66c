// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gp_core::Database;
use gp_sync::SyncClient;

use super::{insert_as_new, open_db};
use crate::config::Config;
use crate::error::Result;

/// Build the single-threaded runtime that drives one sync exchange.
fn runtime() -> Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

pub fn push() -> Result<()> {
    let (db, config, _) = open_db()?;
    push_impl(&db, &config)
}

/// Upload the full local collection. An empty collection is rejected by the
/// client before any network call.
pub(crate) fn push_impl(db: &Database, config: &Config) -> Result<()> {
    let lists = db.get_all_lists()?;
    tracing::debug!(count = lists.len(), url = %config.server, "sync push");
    let client = SyncClient::new(&config.server)?;

    runtime()?.block_on(client.upload(&lists))?;

    let noun = if lists.len() == 1 { "list" } else { "lists" };
    println!("Uploaded {} {} to {}", lists.len(), noun, config.server);
    Ok(())
}

pub fn pull() -> Result<()> {
    let (mut db, config, _) = open_db()?;
    pull_impl(&mut db, &config)
}

/// Download the full remote collection and add every list as a new record.
pub(crate) fn pull_impl(db: &mut Database, config: &Config) -> Result<()> {
    let client = SyncClient::new(&config.server)?;
    let lists = runtime()?.block_on(client.download())?;

    let count = insert_as_new(db, lists)?;

    let noun = if count == 1 { "list" } else { "lists" };
    println!("Downloaded {} {} from {}", count, noun, config.server);
    Ok(())
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
