//
//  sentry-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the CLI:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable output for scripting (`--json`)
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Types rendered as a key/value block
//! - [`TableRow`]: Types rendered as one row of a list table

mod table;

pub use table::*;

use serde::Serialize;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Key/value blocks and tables for humans.
    #[default]
    Table,
    /// Pretty-printed JSON, for scripts.
    Json,
}

/// Writes command results to stdout and errors to stderr in the selected format.
///
/// Colors follow `console`'s detection, so piping the output disables them.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer for `format`.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks JSON when `json` is set, tables otherwise.
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::new(OutputFormat::Json)
        } else {
            Self::new(OutputFormat::Table)
        }
    }

    /// The format this writer renders.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a single resource: JSON, or a key/value block via [`TableOutput`].
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a list of resources: a JSON array, or one table row per item via
    /// [`TableRow`]. An empty list prints `No results` in table mode.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Table => {
                if values.is_empty() {
                    println!("No results");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    /// Prints an arbitrary JSON value, pretty unless `compact` is set.
    pub fn write_value(&self, value: &serde_json::Value, compact: bool) -> anyhow::Result<()> {
        if compact {
            println!("{}", value);
        } else {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(())
    }

    /// Reports a completed action. JSON mode prints `{"success": true, "message": ...}`.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "success": true, "message": msg }))
            }
            OutputFormat::Table if self.color => println!("{} {}", style("✓").green().bold(), msg),
            OutputFormat::Table => println!("✓ {}", msg),
        }
    }

    /// Prints `error: <msg>` to stderr, whatever the format.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }
}

/// Types that render themselves as a block of labelled fields.
pub trait TableOutput {
    /// Prints the fields to stdout, styled when `color` is set.
    fn print_table(&self, color: bool);
}

/// Types that render as one row of a list table.
pub trait TableRow {
    /// Column headers shared by every row.
    fn headers() -> Vec<&'static str>;

    /// The cells of this row, in header order.
    fn row(&self, color: bool) -> Vec<String>;
}

/// Prints one `Label: value` line.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
