//
//  gqlx
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders what the CLI prints. The [`QueryResult`] goes to stdout as JSON so it can be
//! piped; headers and diagnostics go to stderr.
//!
//! ## Streams
//!
//! | What | Stream | Format |
//! |------|--------|--------|
//! | Query result | stdout | Pretty JSON, or one line with `--compact` |
//! | Response headers (`--include`) | stderr | Table |
//! | Errors | stderr | `error:` prefixed line |
//!
//! Color is detected from the terminal and disabled when output is redirected.

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::io;

use console::style;
use serde::Serialize;

use crate::definitions::{Header, QueryResult};

/// Writes results and diagnostics for a single CLI invocation.
///
/// # Example
///
/// ```rust,no_run
/// use gqlx::definitions::QueryResult;
/// use gqlx::output::OutputWriter;
///
/// # fn show(result: &QueryResult) -> anyhow::Result<()> {
/// let writer = OutputWriter::new(false);
/// writer.write_result(result)?;
/// writer.write_headers(&result.headers);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OutputWriter {
    compact: bool,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer, detecting color support from stderr.
    pub fn new(compact: bool) -> Self {
        Self {
            compact,
            color: console::colors_enabled_stderr(),
        }
    }

    /// Enables or disables colored diagnostics.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Turns color off when `plain` is set; otherwise keeps the detected setting.
    pub fn plain(self, plain: bool) -> Self {
        if plain {
            self.with_color(false)
        } else {
            self
        }
    }

    /// Writes the result as JSON to stdout.
    pub fn write_result(&self, result: &QueryResult) -> anyhow::Result<()> {
        self.write_json(result)
    }

    /// Writes any serializable value as JSON to stdout.
    pub fn write_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_json_to(&mut handle, value, self.compact)
    }

    /// Writes the header table to stderr. Nothing is written for an empty list.
    pub fn write_headers(&self, headers: &[Header]) {
        if headers.is_empty() {
            return;
        }
        eprintln!("{}", header_table(headers, self.color));
    }

    /// Writes an error line to stderr.
    pub fn write_error(&self, msg: &str) {
        eprintln!("{}", self.error_line(msg));
    }

    fn error_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {}", style("error:").for_stderr().red().bold(), msg)
        } else {
            format!("error: {msg}")
        }
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(false)
    }
}
