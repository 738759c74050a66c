// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    mint = { AccentColor::Mint, "mint" },
    cyan = { AccentColor::Cyan, "cyan" },
    purple = { AccentColor::Purple, "purple" },
    orange = { AccentColor::Orange, "orange" },
    yellow = { AccentColor::Yellow, "yellow" },
)]
fn accent_color_as_str(color: AccentColor, expected: &str) {
    assert_eq!(color.as_str(), expected);
    assert_eq!(color.to_string(), expected);
}

#[parameterized(
    lower = { "cyan", AccentColor::Cyan },
    upper = { "MINT", AccentColor::Mint },
)]
fn accent_color_from_str_valid(input: &str, expected: AccentColor) {
    assert_eq!(input.parse::<AccentColor>().unwrap(), expected);
}

#[parameterized(
    red = { "red" },
    empty = { "" },
)]
fn accent_color_from_str_invalid(input: &str) {
    assert!(input.parse::<AccentColor>().is_err());
}

#[test]
fn defaults_are_dark_mint() {
    let prefs = Preferences::default();
    assert!(prefs.dark_mode);
    assert_eq!(prefs.accent_color, AccentColor::Mint);
}
