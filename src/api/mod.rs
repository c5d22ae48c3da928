//
//  gqlx
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GraphQL over HTTP
//!
//! This module executes a single GraphQL operation and normalizes the outcome.
//!
//! ## Architecture
//!
//! - [`request`]: builds the URL, body and headers for GET or POST
//! - [`transport`]: the [`Transport`] seam and its `reqwest` implementation
//! - [`response`]: header merge and JSON body parsing
//! - [`client`]: the pipeline entry points and failure classification
//! - [`error`]: the failure taxonomy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gqlx::api::execute_query;
//! use gqlx::auth::Authentication;
//! use gqlx::definitions::{Connection, Input, Options};
//! use gqlx::CancellationToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let input = Input::new("query ($surname: String!) { users(surname: $surname) { name } }")
//!     .variable("surname", "Doe");
//! let connection = Connection::new("https://api.example.com/graphql")
//!     .authentication(Authentication::bearer("token"));
//!
//! let result = execute_query(&input, &connection, &Options::default(), &CancellationToken::new())
//!     .await?;
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```

/// Pipeline entry points.
pub mod client;

/// Failure taxonomy.
pub mod error;

/// Request construction for GET and POST.
pub mod request;

/// Response header merge and body parsing.
pub mod response;

/// The network seam.
pub mod transport;

pub use client::{execute_query, execute_query_with};
pub use error::{ErrorKind, ExecuteError, QueryFailure};
pub use request::{build_request, PreparedRequest};
pub use response::{normalize, NormalizedResponse};
pub use transport::{RawResponse, ReqwestTransport, Transport};
