// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "gro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A grocery-list planner with purchase history and server sync")]
#[command(
    long_about = "A grocery-list planner for the terminal.\n\n\
    Keep named lists of categorized items, check them off as you shop,\n\
    and optionally sync the whole collection with a list server."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if gro was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Lists & items
    // ─────────────────────────────────────────────────────────────────────────
    /// Create a new grocery list
    #[command(after_help = colors::examples("\
Examples:
  gro new Weekend                 Create a list named Weekend
  gro new \"Party supplies\"        Names with spaces need quotes"))]
    New {
        /// List name
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// List all grocery lists with their progress
    #[command(after_help = colors::examples("\
Examples:
  gro list                        All lists, sorted by name
  gro list --sort date            Oldest list first
  gro list -o json                Output in JSON format"))]
    List {
        /// Sort order (name, date)
        #[arg(long, default_value = "name")]
        sort: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the items of one list
    #[command(after_help = colors::examples("\
Examples:
  gro show weekend                Items grouped by category
  gro show weekend --flat         One flat section, sorted by name
  gro show weekend --flat --sort added   Most recently added first
  gro show weekend -o json        Output in JSON format"))]
    Show {
        /// List name (or unique prefix)
        list: String,

        /// Flat view instead of category groups
        #[arg(long)]
        flat: bool,

        /// Sort order in flat view (name, added)
        #[arg(long, default_value = "name")]
        sort: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Rename a list in place
    Rename {
        /// List name (or unique prefix)
        list: String,

        /// New name
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Delete a list and all of its items
    Rm {
        /// List name (or unique prefix)
        list: String,
    },

    /// Add an item to a list
    #[command(after_help = colors::examples("\
Examples:
  gro add weekend Milk                       Add with defaults
  gro add weekend Milk -c dairy -q 2 -u l    Category, quantity, unit
  gro add weekend Apples -t \"granny smith\"   Free-form tag"))]
    Add {
        /// List name (or unique prefix)
        list: String,

        /// Item name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Category (produce, dairy, meat, bakery, frozen, pantry, beverages, household, other)
        #[arg(long, short)]
        category: Option<String>,

        /// Quantity
        #[arg(long = "qty", short)]
        quantity: Option<f64>,

        /// Unit (none, piece, kg, g, l, ml, pack)
        #[arg(long, short)]
        unit: Option<String>,

        /// Free-form tag shown under the item
        #[arg(long, short)]
        tag: Option<String>,
    },

    /// Edit an item's name, category, quantity, unit, or tag
    #[command(after_help = colors::examples("\
Examples:
  gro edit weekend milk name \"Oat milk\"     Rename the item
  gro edit weekend milk category dairy       Move to another category
  gro edit weekend milk quantity 2           Change the amount
  gro edit weekend milk unit l               Change the unit
  gro edit weekend milk tag \"lactose free\"   Replace the tag"))]
    Edit {
        /// List name (or unique prefix)
        list: String,

        /// Item name (or unique prefix)
        item: String,

        /// Attribute to edit (name, category, quantity, unit, tag)
        attr: String,

        /// New value for the attribute
        value: String,
    },

    /// Remove an item from a list
    Drop {
        /// List name (or unique prefix)
        list: String,

        /// Item name (or unique prefix)
        item: String,
    },

    /// Check items off as purchased
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  gro check weekend milk            Check one item off
  gro check weekend milk bread      Check several at once")
    )]
    Check {
        /// List name (or unique prefix)
        list: String,

        /// Item name(s)
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Return items to the unpurchased state
    #[command(arg_required_else_help = true)]
    Uncheck {
        /// List name (or unique prefix)
        list: String,

        /// Item name(s)
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Show the most-purchased products
    #[command(after_help = colors::examples("\
Examples:
  gro stats                       Top 10 products with bars
  gro stats --limit 25            Show more products
  gro stats -o json               Output in JSON format"))]
    Stats {
        /// Maximum number of products to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup & sync
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a grocery planner in this directory
    Init {
        /// Sync endpoint URL to write into the config
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },

    /// Sync lists with the server
    #[command(subcommand)]
    Sync(SyncCommand),

    /// Get or set configuration and preferences
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Export all lists to a JSON file
    Export {
        /// Output file path
        filepath: String,
    },

    /// Import lists from a JSON file (adds them as new lists)
    Import {
        /// Input file path
        filepath: String,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sync subcommands.
#[derive(Subcommand)]
pub enum SyncCommand {
    /// Upload all local lists to the server
    Push,
    /// Download all lists from the server and add them as new lists
    #[command(after_help = colors::examples("\
Downloaded lists are inserted as new records. Pulling twice duplicates
them; there is no deduplication against existing lists."))]
    Pull,
}

/// Config subcommands.
///
/// Keys: `server` (sync endpoint, stored in config.toml), `dark-mode` and
/// `accent-color` (stored with the data).
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print one value, or all values
    Get {
        /// Key (server, dark-mode, accent-color)
        key: Option<String>,
    },
    /// Set a value
    #[command(after_help = colors::examples("\
Examples:
  gro config set server https://lists.example.com:8080/
  gro config set dark-mode off
  gro config set accent-color cyan"))]
    Set {
        /// Key (server, dark-mode, accent-color)
        key: String,

        /// New value
        value: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
