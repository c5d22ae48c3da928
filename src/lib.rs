//
//  gqlx
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # gqlx
//!
//! Executes a single GraphQL operation over HTTP and returns a normalized result.
//!
//! ## Overview
//!
//! One call to [`execute_query`] runs a short, stateless pipeline:
//!
//! 1. Derive the `Authorization` header from the connection's credentials
//! 2. Build a GET or POST request
//! 3. Send it with the configured timeout and certificate policy
//! 4. Merge the response headers and parse the body as a JSON object
//!
//! Any failure along the way is either returned as an error or reported inside the
//! [`QueryResult`], depending on [`Options::throw_error_on_failure`].
//!
//! ## Module Structure
//!
//! - [`definitions`]: Input, Connection, Options and the QueryResult
//! - [`auth`]: Authorization header derivation
//! - [`api`]: Request building, transport, response normalization and error classification
//! - [`config`]: Request files and user defaults
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Result and header rendering for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gqlx::{execute_query, CancellationToken, Connection, Input, Method, Options};
//!
//! # async fn example() -> Result<(), gqlx::QueryFailure> {
//! let input = Input::new("{users{name}}");
//! let connection = Connection::new("http://localhost:4000").method(Method::Get);
//!
//! let result = execute_query(&input, &connection, &Options::default(), &CancellationToken::new())
//!     .await?;
//! println!("{:?}", result.data);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Handling
//!
//! | `throw_error_on_failure` | Outcome of a failure |
//! |--------------------------|----------------------|
//! | `true` (default) | `Err(QueryFailure)` |
//! | `false` | `Ok(QueryResult { success: false, error: Some(..), .. })` |
//!
//! GraphQL `errors` inside a valid JSON body are not failures.

/// Command-line interface definitions.
///
/// Contains the `query`, `completion` and `version` commands defined using the clap
/// derive API.
pub mod cli;

/// GraphQL over HTTP: the execution pipeline.
pub mod api;

/// Authorization header derivation.
pub mod auth;

/// Request files and user-level defaults.
pub mod config;

/// Data model for inputs and results.
pub mod definitions;

/// Output rendering for the CLI.
pub mod output;

pub use api::{execute_query, execute_query_with, ErrorKind, ExecuteError, QueryFailure};

pub use auth::Authentication;

/// Cooperative cancellation, observed while waiting for the network.
pub use tokio_util::sync::CancellationToken;

pub use definitions::{Connection, ErrorInfo, Header, Input, Method, Options, QueryResult, Variable};

/// The application name, used for completions and the configuration directory.
pub const APP_NAME: &str = "gqlx";

/// The crate version, sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes used by the `gqlx` binary.
pub mod exit_codes {
    /// The operation ran and the result reports success.
    pub const SUCCESS: i32 = 0;

    /// The operation failed, either propagated or reported with `success = false`.
    ///
    /// The reason is on stderr, or in the printed result's `error` field.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// The command was invoked with invalid arguments or options.
    /// Use `--help` to see correct usage.
    pub const USAGE: i32 = 2;
}
