//
//  sentry-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tabular terminal output built on `comfy_table`, with UTF-8 box drawing and
//! content arranged to fit the terminal width.
//!
//! ```rust,ignore
//! use sentry_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Slug", "Name", "Status"])
//!     .rows([["web", "Web", "active"]])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    /// Starts an empty table, colored when the terminal supports it.
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Headers should be set before adding rows.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    /// Appends rows; each row is a sequence of cells.
    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            self.table.add_row(row);
        }
        self
    }

    /// Prints the table to stdout.
    pub fn print(self) {
        println!("{}", self.build());
    }

    /// Finishes the builder without printing.
    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a Sentry project status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status {
        "active" => style(status).green().to_string(),
        "pending_deletion" | "deletion_in_progress" => style(status).red().to_string(),
        "disabled" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Renders a flag as `Yes`/`No`.
pub fn format_bool(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
