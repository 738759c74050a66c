// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for lists, items, and purchase stats.

use gp_core::{AccentColor, GroceryItem, GroceryList, PurchasedItem};

use crate::colors;

/// Width of the progress bar in list output.
const PROGRESS_BAR_WIDTH: usize = 10;

/// Maximum width of a stats bar.
const STATS_BAR_WIDTH: usize = 30;

/// Format a quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// Format an item's amount: quantity plus unit label, e.g. "2 l" or "3".
pub fn format_amount(item: &GroceryItem) -> String {
    let label = item.unit.label();
    if label.is_empty() {
        format_quantity(item.quantity)
    } else {
        format!("{} {}", format_quantity(item.quantity), label)
    }
}

/// Render a progress bar of the given width, e.g. "======----".
pub fn progress_bar(progress: f64, width: usize) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let mut bar = String::with_capacity(width);
    for _ in 0..filled {
        bar.push('=');
    }
    for _ in filled..width {
        bar.push('-');
    }
    bar
}

/// Format a single list line: name, checked/total, progress bar.
pub fn format_list_line(list: &GroceryList, accent: AccentColor) -> String {
    let bar = colors::accent(
        &progress_bar(list.progress(), PROGRESS_BAR_WIDTH),
        accent,
    );
    format!(
        "- {}  {}/{}  [{}]",
        list.name,
        list.checked_count(),
        list.items.len(),
        bar
    )
}

/// Format a single item: checkbox line plus an optional indented tag line.
pub fn format_item_lines(item: &GroceryItem, accent: AccentColor) -> Vec<String> {
    let checkbox = if item.active {
        "[ ]".to_string()
    } else {
        colors::accent("[x]", accent)
    };
    let mut lines = vec![format!(
        "  {} {}  {}",
        checkbox,
        item.name,
        format_amount(item)
    )];
    if !item.tag.trim().is_empty() {
        lines.push(format!("        {}", item.tag));
    }
    lines
}

/// Format a stats row: name, count bar scaled against the most-purchased
/// product, and the count itself.
pub fn format_purchase_line(
    record: &PurchasedItem,
    name_width: usize,
    max_count: i64,
    accent: AccentColor,
) -> String {
    let width = if max_count > 0 {
        ((record.count as f64 / max_count as f64) * STATS_BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let bar: String = "#".repeat(width.max(1));
    format!(
        "  {:<name_width$}  {} {}",
        record.name,
        colors::accent(&bar, accent),
        record.count
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
