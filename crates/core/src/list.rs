// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core grocery types: GroceryList, GroceryItem, Category, and Unit.
//!
//! Serde attributes on [`GroceryList`] and [`GroceryItem`] pin the JSON field
//! names to the sync wire shape (`date`, `groceryItems`, `isActive`,
//! `dateAdded`), which is also the export format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Classification of grocery items by store section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fruit and vegetables.
    Produce,
    /// Milk, cheese, yogurt.
    Dairy,
    /// Meat and fish.
    Meat,
    /// Bread and pastry.
    Bakery,
    /// Frozen goods.
    Frozen,
    /// Dry goods and staples.
    Pantry,
    /// Drinks, juices, water.
    Beverages,
    /// Cleaning and household supplies.
    Household,
    /// Everything else. Default for new items.
    Other,
}

impl Category {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Bakery => "bakery",
            Category::Frozen => "frozen",
            Category::Pantry => "pantry",
            Category::Beverages => "beverages",
            Category::Household => "household",
            Category::Other => "other",
        }
    }

    /// All categories in display order (store-walk order, other last).
    pub fn all() -> [Category; 9] {
        [
            Category::Produce,
            Category::Dairy,
            Category::Meat,
            Category::Bakery,
            Category::Frozen,
            Category::Pantry,
            Category::Beverages,
            Category::Household,
            Category::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "produce" => Ok(Category::Produce),
            "dairy" => Ok(Category::Dairy),
            "meat" => Ok(Category::Meat),
            "bakery" => Ok(Category::Bakery),
            "frozen" => Ok(Category::Frozen),
            "pantry" => Ok(Category::Pantry),
            "beverages" => Ok(Category::Beverages),
            "household" => Ok(Category::Household),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Measurement unit for an item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// No unit. Default for new items.
    None,
    /// Countable pieces.
    Piece,
    /// Kilograms.
    Kg,
    /// Grams.
    G,
    /// Liters.
    L,
    /// Milliliters.
    Ml,
    /// Pre-packaged multiples.
    Pack,
}

impl Unit {
    /// Returns the string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "none",
            Unit::Piece => "piece",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Pack => "pack",
        }
    }

    /// Short label for display next to a quantity; empty for [`Unit::None`].
    pub fn label(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Piece => "pc",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Pack => "pack",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(Unit::None),
            "piece" | "pc" | "pcs" => Ok(Unit::Piece),
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "l" => Ok(Unit::L),
            "ml" => Ok(Unit::Ml),
            "pack" => Ok(Unit::Pack),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

/// A single grocery entry owned by one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Unique identifier.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Store section the item belongs to.
    pub category: Category,
    /// True while the item has not been purchased yet.
    #[serde(rename = "isActive")]
    pub active: bool,
    /// Amount to buy, interpreted via `unit`.
    pub quantity: f64,
    /// Measurement unit for `quantity`.
    pub unit: Unit,
    /// When the item was added to its list.
    #[serde(rename = "dateAdded")]
    pub added_at: DateTime<Utc>,
    /// Free-form note shown under the item; empty when unused.
    pub tag: String,
}

impl GroceryItem {
    /// Creates a new unpurchased item with default category, quantity, and unit.
    pub fn new(name: impl Into<String>, added_at: DateTime<Utc>) -> Self {
        GroceryItem {
            id: Uuid::new_v4(),
            name: name.into(),
            category: Category::Other,
            active: true,
            quantity: 1.0,
            unit: Unit::None,
            added_at,
            tag: String::new(),
        }
    }

    /// Sets the category (builder pattern).
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets quantity and unit (builder pattern).
    pub fn with_quantity(mut self, quantity: f64, unit: Unit) -> Self {
        self.quantity = quantity;
        self.unit = unit;
        self
    }

    /// Sets the tag (builder pattern).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

/// A named, ordered collection of grocery items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    /// Unique identifier.
    pub id: Uuid,
    /// List name; mutable, edited in place.
    pub name: String,
    /// When the list was created.
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    /// Items owned by this list; cascade-deleted with it.
    #[serde(rename = "groceryItems")]
    pub items: Vec<GroceryItem>,
}

impl GroceryList {
    /// Creates a new empty list.
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        GroceryList {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at,
            items: Vec::new(),
        }
    }

    /// Number of items already purchased (checked off).
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| !i.active).count()
    }

    /// Fraction of items purchased, in `0.0..=1.0`. Zero for an empty list.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.checked_count() as f64 / self.items.len() as f64
    }
}

/// Sort order for list collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSort {
    /// By name, then creation date.
    #[default]
    Name,
    /// By creation date, then name.
    Date,
}

impl FromStr for ListSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ListSort::Name),
            "date" => Ok(ListSort::Date),
            _ => Err(Error::InvalidListSort(s.to_string())),
        }
    }
}

/// Sort order for the items of one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSort {
    /// Alphabetical by name.
    #[default]
    Name,
    /// Most recently added first.
    Added,
}

impl FromStr for ItemSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ItemSort::Name),
            "added" => Ok(ItemSort::Added),
            _ => Err(Error::InvalidItemSort(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
