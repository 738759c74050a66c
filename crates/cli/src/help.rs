// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let placeholder =
        Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(placeholder)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_lists}
  {new}         Create a new grocery list
  {list}        List all lists with their progress
  {show}        Show the items of one list
  {rename}      Rename a list in place
  {rm}          Delete a list and its items
  {add}         Add an item to a list
  {edit}        Edit an item's properties
  {drop}        Remove an item from a list
  {check}       Check items off as purchased
  {uncheck}     Return items to the unpurchased state
  {stats}       Show the most-purchased products

{header_setup}
  {init}        Initialize a grocery planner
  {sync}        Upload/download lists to the server
  {config}      Get or set configuration and preferences
  {export}      Export lists to a JSON file
  {import}      Import lists from a JSON file
  {completion}  Generate shell completions",
        header_lists = colors::header("Lists & Items:"),
        header_setup = colors::header("Setup & Sync:"),
        new = colors::literal("new"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        rename = colors::literal("rename"),
        rm = colors::literal("rm"),
        add = colors::literal("add"),
        edit = colors::literal("edit"),
        drop = colors::literal("drop"),
        check = colors::literal("check"),
        uncheck = colors::literal("uncheck"),
        stats = colors::literal("stats"),
        init = colors::literal("init"),
        sync = colors::literal("sync"),
        config = colors::literal("config"),
        export = colors::literal("export"),
        import = colors::literal("import"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  gro init                 Initialize the planner
  gro new Weekend          Create a list
  gro add weekend Milk     Put something on it
  gro check weekend milk   Check it off at the store
  gro stats                See what you buy most",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
