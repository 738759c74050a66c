// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

// Input length limits
pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_TAG_LENGTH: usize = 500;

/// Validate a list name: non-empty after trimming, within length limits.
/// Returns the trimmed name.
pub fn validate_list_name(name: &str) -> Result<String> {
    validate_name(name, "List name")
}

/// Validate an item name: non-empty after trimming, within length limits.
/// Returns the trimmed name.
pub fn validate_item_name(name: &str) -> Result<String> {
    validate_name(name, "Item name")
}

fn validate_name(name: &str, field: &'static str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(Error::FieldTooLong {
            field,
            actual: trimmed.len(),
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a tag: may be empty, within length limits. Returns the trimmed tag.
pub fn validate_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim();
    if trimmed.len() > MAX_TAG_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Tag",
            actual: trimmed.len(),
            max: MAX_TAG_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a quantity: finite and greater than zero.
pub fn validate_quantity(quantity: f64) -> Result<f64> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(Error::QuantityNotPositive(quantity));
    }
    Ok(quantity)
}

/// Parse an on/off style boolean value.
pub fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(Error::InvalidBool {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
