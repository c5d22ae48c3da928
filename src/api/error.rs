//
//  gqlx
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Failure taxonomy for the execution pipeline.
//!
//! Every failure is an [`ExecuteError`]. Each variant belongs to one [`ErrorKind`]:
//!
//! | Kind | Variants |
//! |------|----------|
//! | `Configuration` | `EmptyEndpoint`, `UnsupportedMethod`, `InvalidHeader`, `ClientBuild` |
//! | `Transport` | `Request`, `Timeout`, `Cancelled` |
//! | `Normalization` | `InvalidBody` |
//!
//! When the caller asks for failures to be propagated, the error is wrapped in a
//! [`QueryFailure`] that carries the user-facing message and keeps the cause as its source.

use std::error::Error as _;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure at any stage of the pipeline.
#[derive(Error, Debug)]
pub enum ExecuteError {
    /// The endpoint URL was empty.
    #[error("Url can not be empty.")]
    EmptyEndpoint,

    /// The HTTP method is neither GET nor POST.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A request header could not be represented on the wire.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be configured.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connecting, sending, or reading the response failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("The request timed out after {0} seconds")]
    Timeout(u64),

    /// The caller cancelled the operation.
    #[error("The operation was cancelled")]
    Cancelled,

    /// The response body is not a single JSON object.
    #[error("Response body is not a valid JSON object: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl ExecuteError {
    /// Returns the class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyEndpoint
            | Self::UnsupportedMethod(_)
            | Self::InvalidHeader { .. }
            | Self::ClientBuild(_) => ErrorKind::Configuration,
            Self::Request(_) | Self::Timeout(_) | Self::Cancelled => ErrorKind::Transport,
            Self::InvalidBody(_) => ErrorKind::Normalization,
        }
    }

    /// Renders the error followed by every source in its chain, separated by `: `.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = self.source();
        // The top-level message of `#[from]`/`#[source]` variants already embeds the first
        // source; skip it when it repeats verbatim.
        while let Some(err) = source {
            let text = err.to_string();
            if !detail.ends_with(&text) {
                detail.push_str(": ");
                detail.push_str(&text);
            }
            source = err.source();
        }
        detail
    }
}

/// The stage of the pipeline a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Invalid input detected before any network activity.
    Configuration,
    /// Connection, TLS, timeout or cancellation failure.
    Transport,
    /// The response body could not be parsed.
    Normalization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => f.write_str("configuration"),
            Self::Transport => f.write_str("transport"),
            Self::Normalization => f.write_str("normalization"),
        }
    }
}

/// A failure propagated to the caller because `throw_error_on_failure` was set.
///
/// `message` is the configured override when one was given, otherwise the cause's message.
/// The cause is always available through [`std::error::Error::source`] and [`Self::cause`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct QueryFailure {
    message: String,
    #[source]
    cause: ExecuteError,
}

impl QueryFailure {
    pub(crate) fn new(message: String, cause: ExecuteError) -> Self {
        Self { message, cause }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure.
    pub fn cause(&self) -> &ExecuteError {
        &self.cause
    }

    /// Shorthand for `self.cause().kind()`.
    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }
}
