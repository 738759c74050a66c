// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Purchase-history aggregate used for the most-purchased chart.
//!
//! One [`PurchasedItem`] exists per distinct product name (case-insensitive).
//! Marking a grocery item purchased either creates the record with count 1 or
//! replaces it with count + 1 and a refreshed date; see
//! [`Database::record_purchase`](crate::db::Database::record_purchase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-product purchase-count record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedItem {
    /// Unique identifier; replaced records get a fresh one.
    pub id: Uuid,
    /// Product name, stored lowercased.
    pub name: String,
    /// When the product was last purchased.
    pub purchased_at: DateTime<Utc>,
    /// How many times the product has been purchased. Always >= 1.
    pub count: i64,
}

impl PurchasedItem {
    /// Creates a first-purchase record with count 1. The name is lowercased.
    pub fn new(name: &str, purchased_at: DateTime<Utc>) -> Self {
        PurchasedItem {
            id: Uuid::new_v4(),
            name: name.to_lowercase(),
            purchased_at,
            count: 1,
        }
    }

    /// Builds the replacement record for a repeat purchase: fresh id,
    /// incremented count, refreshed date.
    pub fn bumped(&self, purchased_at: DateTime<Utc>) -> Self {
        PurchasedItem {
            id: Uuid::new_v4(),
            name: self.name.to_lowercase(),
            purchased_at,
            count: self.count + 1,
        }
    }

    /// Case-insensitive match against a grocery item name.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
#[path = "purchase_tests.rs"]
mod tests;
