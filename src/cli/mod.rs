//
//  gqlx
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! Command definitions for the `gqlx` binary, built with the `clap` derive API.
//!
//! ## Command Structure
//!
//! ```text
//! gqlx
//! ├── query       Execute one GraphQL operation
//! ├── completion  Generate shell completion scripts
//! └── version     Print version information
//! ```
//!
//! ## Global Options
//!
//! - `--config`: Alternate user configuration file (env: `GQLX_CONFIG`)
//! - `--no-color`: Disable colored diagnostics
//!
//! ## Exit Codes
//!
//! Commands report how the process should exit with a code from
//! [`exit_codes`](crate::exit_codes). Invalid flag combinations surface as a
//! [`UsageError`], which the binary maps to [`exit_codes::USAGE`](crate::exit_codes::USAGE).

mod completion;
mod query;

pub use completion::CompletionCommand;
pub use query::QueryCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

/// gqlx - Run GraphQL operations from the command line
#[derive(Parser, Debug)]
#[command(
    name = "gqlx",
    version,
    about = "Run GraphQL operations from the command line",
    long_about = "gqlx sends one GraphQL query or mutation over HTTP and prints a normalized \
                  result: a success flag, the response data, the merged response headers and \
                  a structured error when something went wrong.",
    propagate_version = true,
    after_help = "Use 'gqlx <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Path to the user configuration file
    #[arg(long, global = true, env = "GQLX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

impl GlobalOptions {
    /// Loads the user configuration, from `--config` when given.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a GraphQL operation
    #[command(visible_alias = "q")]
    Query(QueryCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// A command-line mistake the user can fix by changing the flags.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
