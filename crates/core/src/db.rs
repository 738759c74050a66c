// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for grocery storage.
//!
//! The [`Database`] struct provides all data access operations for lists,
//! items, the purchase-history aggregate, and user preferences.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::list::{GroceryItem, GroceryList, ListSort};
use crate::prefs::{AccentColor, Preferences, KEY_ACCENT_COLOR, KEY_DARK_MODE};
use crate::purchase::PurchasedItem;

/// SQL schema for the grocery database.
pub const SCHEMA: &str = r#"
-- Grocery lists
CREATE TABLE IF NOT EXISTS lists (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Items owned by a list; removed with it
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    list_id TEXT NOT NULL,
    name TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT 'other',
    active INTEGER NOT NULL DEFAULT 1,
    quantity REAL NOT NULL DEFAULT 1,
    unit TEXT NOT NULL DEFAULT 'none',
    added_at TEXT NOT NULL,
    tag TEXT NOT NULL DEFAULT '',
    FOREIGN KEY (list_id) REFERENCES lists(id) ON DELETE CASCADE
);

-- Purchase-history aggregate, one row per distinct product name
CREATE TABLE IF NOT EXISTS purchases (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    purchased_at TEXT NOT NULL,
    count INTEGER NOT NULL DEFAULT 1
);

-- User preferences (dark mode, accent color)
CREATE TABLE IF NOT EXISTS prefs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_items_list ON items(list_id);
CREATE INDEX IF NOT EXISTS idx_items_category ON items(category);
CREATE INDEX IF NOT EXISTS idx_purchases_count ON purchases(count DESC);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Parse a UUID from the database.
fn parse_uuid(value: &str, column: &str) -> std::result::Result<Uuid, rusqlite::Error> {
    Uuid::parse_str(value).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid uuid '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Run schema creation and all migrations on a database connection.
///
/// This is the single migration path for every caller. It applies the
/// canonical schema and runs idempotent migrations to upgrade older
/// databases that may be missing columns.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_tag(conn)?;
    tracing::debug!("schema ready");
    Ok(())
}

/// Migration: Add tag column to item tables created before it existed.
fn migrate_add_tag(conn: &Connection) -> Result<()> {
    let has_tag: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('items') WHERE name = 'tag'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !has_tag {
        conn.execute("ALTER TABLE items ADD COLUMN tag TEXT NOT NULL DEFAULT ''", [])?;
    }
    Ok(())
}

/// Map an items row (id, name, category, active, quantity, unit, added_at, tag).
fn item_from_row(row: &Row<'_>) -> std::result::Result<GroceryItem, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let category_str: String = row.get(2)?;
    let unit_str: String = row.get(5)?;
    let added_str: String = row.get(6)?;

    Ok(GroceryItem {
        id: parse_uuid(&id_str, "id")?,
        name: row.get(1)?,
        category: parse_db(&category_str, "category")?,
        active: row.get(3)?,
        quantity: row.get(4)?,
        unit: parse_db(&unit_str, "unit")?,
        added_at: parse_timestamp(&added_str, "added_at")?,
        tag: row.get(7)?,
    })
}

/// SQLite database connection with grocery operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Create a new list along with any items it already carries.
    ///
    /// Downloads and imports insert fully-populated lists through this path;
    /// the list row and its item rows land in one transaction.
    pub fn create_list(&mut self, list: &GroceryList) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO lists (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![
                list.id.to_string(),
                list.name,
                list.created_at.to_rfc3339(),
            ],
        )?;
        for item in &list.items {
            insert_item_row(&tx, &list.id, item)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Get a list by id, with its items in the order they were added.
    pub fn get_list(&self, id: &Uuid) -> Result<GroceryList> {
        let list = self
            .conn
            .query_row(
                "SELECT id, name, created_at FROM lists WHERE id = ?1",
                params![id.to_string()],
                |row| {
                    let id_str: String = row.get(0)?;
                    let created_str: String = row.get(2)?;
                    Ok(GroceryList {
                        id: parse_uuid(&id_str, "id")?,
                        name: row.get(1)?,
                        created_at: parse_timestamp(&created_str, "created_at")?,
                        items: Vec::new(),
                    })
                },
            )
            .optional()?;

        let mut list = list.ok_or_else(|| Error::ListNotFound(id.to_string()))?;
        list.items = self.get_items(id)?;
        Ok(list)
    }

    /// Check if a list exists.
    pub fn list_exists(&self, id: &Uuid) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM lists WHERE id = ?1",
            params![id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Get all lists with their items, in the requested order.
    pub fn list_lists(&self, sort: ListSort) -> Result<Vec<GroceryList>> {
        let order = match sort {
            ListSort::Name => "name COLLATE NOCASE, created_at",
            ListSort::Date => "created_at, name COLLATE NOCASE",
        };
        let sql =
            format!("SELECT id, name, created_at FROM lists ORDER BY {order}");
        let mut stmt = self.conn.prepare(&sql)?;

        let mut lists = stmt
            .query_map([], |row| {
                let id_str: String = row.get(0)?;
                let created_str: String = row.get(2)?;
                Ok(GroceryList {
                    id: parse_uuid(&id_str, "id")?,
                    name: row.get(1)?,
                    created_at: parse_timestamp(&created_str, "created_at")?,
                    items: Vec::new(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for list in &mut lists {
            list.items = self.get_items(&list.id)?;
        }
        Ok(lists)
    }

    /// Get all lists ordered by creation date. This is the upload payload.
    pub fn get_all_lists(&self) -> Result<Vec<GroceryList>> {
        self.list_lists(ListSort::Date)
    }

    /// Rename a list in place. The id and items are untouched.
    pub fn rename_list(&mut self, id: &Uuid, name: &str) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE lists SET name = ?1 WHERE id = ?2",
            params![name, id.to_string()],
        )?;

        if affected == 0 {
            return Err(Error::ListNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Delete a list. Its items go with it (cascade).
    pub fn delete_list(&mut self, id: &Uuid) -> Result<()> {
        let affected = self.conn.execute(
            "DELETE FROM lists WHERE id = ?1",
            params![id.to_string()],
        )?;

        if affected == 0 {
            return Err(Error::ListNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Resolve a list by name: exact case-insensitive match first, then a
    /// unique case-insensitive prefix.
    pub fn resolve_list(&self, query: &str) -> Result<GroceryList> {
        let names: Vec<(String, String)> = {
            let mut stmt = self.conn.prepare("SELECT id, name FROM lists")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        };

        let query_lower = query.to_lowercase();
        if let Some((id, _)) = names
            .iter()
            .find(|(_, name)| name.to_lowercase() == query_lower)
        {
            let id = parse_uuid(id, "id").map_err(Error::Database)?;
            return self.get_list(&id);
        }

        let matches: Vec<&(String, String)> = names
            .iter()
            .filter(|(_, name)| name.to_lowercase().starts_with(&query_lower))
            .collect();

        match matches.as_slice() {
            [] => Err(Error::ListNotFound(query.to_string())),
            [(id, _)] => {
                let id = parse_uuid(id, "id").map_err(Error::Database)?;
                self.get_list(&id)
            }
            many => Err(Error::AmbiguousList {
                query: query.to_string(),
                matches: many.iter().map(|(_, name)| name.clone()).collect(),
            }),
        }
    }

    /// Get the items of a list in the order they were added.
    pub fn get_items(&self, list_id: &Uuid) -> Result<Vec<GroceryItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, active, quantity, unit, added_at, tag
             FROM items WHERE list_id = ?1 ORDER BY added_at, rowid",
        )?;

        let items = stmt
            .query_map(params![list_id.to_string()], item_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(items)
    }

    /// Get an item by id.
    pub fn get_item(&self, id: &Uuid) -> Result<GroceryItem> {
        let item = self
            .conn
            .query_row(
                "SELECT id, name, category, active, quantity, unit, added_at, tag
                 FROM items WHERE id = ?1",
                params![id.to_string()],
                item_from_row,
            )
            .optional()?;

        item.ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    /// Add an item to a list.
    pub fn add_item(&mut self, list_id: &Uuid, item: &GroceryItem) -> Result<()> {
        if !self.list_exists(list_id)? {
            return Err(Error::ListNotFound(list_id.to_string()));
        }
        insert_item_row(&self.conn, list_id, item)?;
        Ok(())
    }

    /// Update every mutable field of an item.
    pub fn update_item(&mut self, item: &GroceryItem) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE items SET name = ?1, category = ?2, active = ?3, quantity = ?4,
             unit = ?5, tag = ?6 WHERE id = ?7",
            params![
                item.name,
                item.category.as_str(),
                item.active,
                item.quantity,
                item.unit.as_str(),
                item.tag,
                item.id.to_string(),
            ],
        )?;

        if affected == 0 {
            return Err(Error::ItemNotFound(item.id.to_string()));
        }
        Ok(())
    }

    /// Flip an item's purchased flag. `active = false` means purchased.
    pub fn set_item_active(&mut self, id: &Uuid, active: bool) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE items SET active = ?1 WHERE id = ?2",
            params![active, id.to_string()],
        )?;

        if affected == 0 {
            return Err(Error::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Delete a single item.
    pub fn delete_item(&mut self, id: &Uuid) -> Result<()> {
        let affected = self.conn.execute(
            "DELETE FROM items WHERE id = ?1",
            params![id.to_string()],
        )?;

        if affected == 0 {
            return Err(Error::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Resolve an item within a list by name: exact case-insensitive match
    /// first, then a unique case-insensitive prefix.
    pub fn resolve_item(&self, list_id: &Uuid, query: &str) -> Result<GroceryItem> {
        let items = self.get_items(list_id)?;
        let query_lower = query.to_lowercase();

        if let Some(item) = items
            .iter()
            .find(|i| i.name.to_lowercase() == query_lower)
        {
            return Ok(item.clone());
        }

        let matches: Vec<&GroceryItem> = items
            .iter()
            .filter(|i| i.name.to_lowercase().starts_with(&query_lower))
            .collect();

        match matches.as_slice() {
            [] => Err(Error::ItemNotFound(query.to_string())),
            [item] => Ok((*item).clone()),
            many => Err(Error::AmbiguousItem {
                query: query.to_string(),
                matches: many.iter().map(|i| i.name.clone()).collect(),
            }),
        }
    }

    /// Record a purchase of the given product name.
    ///
    /// Scans all purchase records for a case-insensitive name match. A match
    /// is deleted and reinserted with count + 1 and a refreshed date; a miss
    /// inserts a fresh record with count 1. Returns the resulting record.
    pub fn record_purchase(
        &mut self,
        name: &str,
        purchased_at: DateTime<Utc>,
    ) -> Result<PurchasedItem> {
        for existing in self.all_purchases()? {
            if existing.matches(name) {
                let replacement = existing.bumped(purchased_at);
                self.delete_purchase(&existing.id)?;
                self.insert_purchase(&replacement)?;
                return Ok(replacement);
            }
        }

        let record = PurchasedItem::new(name, purchased_at);
        self.insert_purchase(&record)?;
        Ok(record)
    }

    /// Insert a purchase record.
    pub fn insert_purchase(&mut self, record: &PurchasedItem) -> Result<()> {
        self.conn.execute(
            "INSERT INTO purchases (id, name, purchased_at, count) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.id.to_string(),
                record.name,
                record.purchased_at.to_rfc3339(),
                record.count,
            ],
        )?;
        Ok(())
    }

    /// Delete a purchase record.
    pub fn delete_purchase(&mut self, id: &Uuid) -> Result<()> {
        self.conn.execute(
            "DELETE FROM purchases WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(())
    }

    /// Get all purchase records, unordered.
    pub fn all_purchases(&self) -> Result<Vec<PurchasedItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, purchased_at, count FROM purchases")?;

        let records = stmt
            .query_map([], purchase_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Get the most-purchased products, count descending. Chart data.
    pub fn top_purchases(&self, limit: usize) -> Result<Vec<PurchasedItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, purchased_at, count FROM purchases
             ORDER BY count DESC, name LIMIT ?1",
        )?;

        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let records = stmt
            .query_map(params![limit_i64], purchase_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Read a raw preference value.
    pub fn get_pref(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a raw preference value, replacing any existing one.
    pub fn set_pref(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load both preference values, applying defaults for unset keys.
    pub fn prefs(&self) -> Result<Preferences> {
        let defaults = Preferences::default();
        let dark_mode = match self.get_pref(KEY_DARK_MODE)? {
            Some(v) => v == "true",
            None => defaults.dark_mode,
        };
        let accent_color = match self.get_pref(KEY_ACCENT_COLOR)? {
            Some(v) => v.parse()?,
            None => defaults.accent_color,
        };
        Ok(Preferences {
            dark_mode,
            accent_color,
        })
    }

    /// Set the dark-mode preference.
    pub fn set_dark_mode(&mut self, on: bool) -> Result<()> {
        self.set_pref(KEY_DARK_MODE, if on { "true" } else { "false" })
    }

    /// Set the accent-color preference.
    pub fn set_accent_color(&mut self, color: AccentColor) -> Result<()> {
        self.set_pref(KEY_ACCENT_COLOR, color.as_str())
    }
}

/// Insert one items row. Shared between list creation and item addition.
fn insert_item_row(
    conn: &Connection,
    list_id: &Uuid,
    item: &GroceryItem,
) -> std::result::Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO items (id, list_id, name, category, active, quantity, unit, added_at, tag)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            item.id.to_string(),
            list_id.to_string(),
            item.name,
            item.category.as_str(),
            item.active,
            item.quantity,
            item.unit.as_str(),
            item.added_at.to_rfc3339(),
            item.tag,
        ],
    )?;
    Ok(())
}

/// Map a purchases row (id, name, purchased_at, count).
fn purchase_from_row(row: &Row<'_>) -> std::result::Result<PurchasedItem, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let purchased_str: String = row.get(2)?;
    Ok(PurchasedItem {
        id: parse_uuid(&id_str, "id")?,
        name: row.get(1)?,
        purchased_at: parse_timestamp(&purchased_str, "purchased_at")?,
        count: row.get(3)?,
    })
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
