// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The sync client: full-replace JSON exchange with the list server.

use std::time::Duration;

use gp_core::GroceryList;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Request timeout. A request past this surfaces as a network error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the grocery-list server.
///
/// Both operations target the same endpoint URL: POST to upload the full
/// local collection, GET to download the full remote collection.
pub struct SyncClient {
    url: String,
    client: reqwest::Client,
}

impl SyncClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(SyncClient {
            url: url.to_string(),
            client,
        })
    }

    /// Uploads the full local list collection.
    ///
    /// An empty collection is rejected before any network call. On success
    /// the server echoes the accepted collection; only the count of echoed
    /// lists is compared to the count sent, not their content. All-or-nothing
    /// from the caller's perspective: any failure means nothing can be
    /// assumed about the remote state.
    pub async fn upload(&self, lists: &[GroceryList]) -> Result<()> {
        if lists.is_empty() {
            return Err(Error::NothingToUpload);
        }

        let body = serde_json::to_vec(lists).map_err(Error::Encode)?;
        debug!(count = lists.len(), url = %self.url, "uploading lists");

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let echoed: Vec<GroceryList> = serde_json::from_str(&text).map_err(Error::Decode)?;

        if echoed.len() != lists.len() {
            return Err(Error::CountMismatch {
                sent: lists.len(),
                received: echoed.len(),
            });
        }

        info!(count = lists.len(), "upload complete");
        Ok(())
    }

    /// Downloads the full remote list collection.
    ///
    /// Zero lists is an error; the caller is expected to insert every
    /// returned list as a new record, without deduplicating against
    /// existing ids.
    pub async fn download(&self) -> Result<Vec<GroceryList>> {
        debug!(url = %self.url, "downloading lists");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let lists: Vec<GroceryList> = serde_json::from_str(&text).map_err(Error::Decode)?;

        if lists.is_empty() {
            return Err(Error::EmptyRemote);
        }

        info!(count = lists.len(), "download complete");
        Ok(lists)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
