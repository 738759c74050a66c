// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User preferences stored in the database key-value table.
//!
//! Two values: the dark-mode flag and the accent color name. Defaults apply
//! when a key has never been written.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Preference key for the dark-mode flag.
pub const KEY_DARK_MODE: &str = "dark_mode";
/// Preference key for the accent color name.
pub const KEY_ACCENT_COLOR: &str = "accent_color";

/// Accent color choices offered by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentColor {
    #[default]
    Mint,
    Cyan,
    Purple,
    Orange,
    Yellow,
}

impl AccentColor {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Mint => "mint",
            AccentColor::Cyan => "cyan",
            AccentColor::Purple => "purple",
            AccentColor::Orange => "orange",
            AccentColor::Yellow => "yellow",
        }
    }

    /// All colors in display order.
    pub fn all() -> [AccentColor; 5] {
        [
            AccentColor::Mint,
            AccentColor::Cyan,
            AccentColor::Purple,
            AccentColor::Orange,
            AccentColor::Yellow,
        ]
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccentColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mint" => Ok(AccentColor::Mint),
            "cyan" => Ok(AccentColor::Cyan),
            "purple" => Ok(AccentColor::Purple),
            "orange" => Ok(AccentColor::Orange),
            "yellow" => Ok(AccentColor::Yellow),
            _ => Err(Error::InvalidAccentColor(s.to_string())),
        }
    }
}

/// The two user preference values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    /// Dark mode on/off. Defaults to on.
    pub dark_mode: bool,
    /// Accent color. Defaults to mint.
    pub accent_color: AccentColor,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            dark_mode: true,
            accent_color: AccentColor::Mint,
        }
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
