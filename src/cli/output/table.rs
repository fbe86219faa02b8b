//! Table output formatting for CLI commands
//!
//! Renders user lists, casts and omitted lookups with comfy-table.
//! Respects `NO_COLOR` and dumb terminals.

use std::env;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use super::truncate;
use crate::domain::models::{Cast, CollectedSet, OmittedLookup, UserSummary};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format featured users as a table
    pub fn format_users(&self, users: &[UserSummary]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&[
            "Username",
            "Name",
            "Followers",
            "Following",
            "Verified",
            "Joined",
        ]));

        for user in users {
            let verified = if user.verified {
                self.colored("✓", Color::Green)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                Cell::new(format!("@{}", user.username)),
                Cell::new(truncate(&user.display_name, 30)),
                Cell::new(&user.followers),
                Cell::new(&user.following),
                verified,
                Cell::new(&user.join_date),
            ]);
        }

        table.to_string()
    }

    /// Format a profile's casts, marking the collected ones
    pub fn format_casts(&self, casts: &[Cast], collected: &CollectedSet) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&[
            "ID", "Cast", "Posted", "Likes", "Recasts", "Replies", "Score", "Collected",
        ]));

        for cast in casts {
            let collected_cell = if collected.contains(cast.id) {
                self.colored("★", Color::Yellow)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                Cell::new(cast.id),
                Cell::new(truncate(&cast.text, 60)),
                Cell::new(&cast.timestamp),
                Cell::new(cast.likes),
                Cell::new(cast.recasts),
                Cell::new(cast.replies),
                Cell::new(cast.engagement).add_attribute(Attribute::Bold),
                collected_cell,
            ]);
        }

        table.to_string()
    }

    /// Format lookups the aggregator left out
    pub fn format_omitted(&self, omitted: &[OmittedLookup]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Lookup", "Reason"]));

        for entry in omitted {
            table.add_row(vec![
                Cell::new(&entry.key),
                self.colored(truncate(&entry.reason, 80), Color::Red),
            ]);
        }

        table.to_string()
    }

    fn colored(&self, text: impl Into<String>, color: Color) -> Cell {
        let cell = Cell::new(text.into());
        if self.use_colors {
            cell.fg(color)
        } else {
            cell
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
