//
//  gqlx
//  definitions/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Query Definitions
//!
//! The values a caller hands to [`execute_query`](crate::api::execute_query) and the
//! [`QueryResult`] it gets back.
//!
//! Every type here is a plain, immutable-by-convention value: it is built once right before
//! a single pipeline run and dropped afterwards. Nothing is cached or shared between runs.
//!
//! ## Overview
//!
//! - [`Input`]: the query text, its variables and optional protocol fields
//! - [`Connection`]: where and how to send the request
//! - [`Options`]: failure handling, timeout and certificate policy
//! - [`QueryResult`]: what came back
//!
//! ## Example
//!
//! ```rust
//! use gqlx::definitions::{Connection, Input, Method, Options};
//! use serde_json::json;
//!
//! let input = Input::new("query ($surname: String!) { users(surname: $surname) { name } }")
//!     .variable("surname", json!("Doe"));
//!
//! let connection = Connection::new("http://localhost:4000").method(Method::Get);
//!
//! let options = Options::default().throw_error_on_failure(false);
//! assert_eq!(options.connection_timeout_seconds, 30);
//! ```

mod connection;

pub use connection::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::error::ErrorKind;

/// A single named value, used for both GraphQL variables and protocol extensions.
///
/// The value may be any JSON-representable type. POST requests keep the type; GET requests
/// flatten it to its string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// The variable name, without the leading `$`.
    pub key: String,
    /// The variable value.
    pub value: Value,
}

impl Variable {
    /// Creates a new variable.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An HTTP header name/value pair.
///
/// Used for caller-supplied request headers and for the headers reported in a
/// [`QueryResult`]. Names are not validated or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Name of the header.
    pub name: String,
    /// Value of the header.
    #[serde(default)]
    pub value: String,
}

impl Header {
    /// Creates a new header.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The GraphQL operation to execute.
///
/// # Fields
///
/// * `query` - The GraphQL document text. It is sent as-is and never parsed.
/// * `variables` - Ordered variables. Keys are assumed to be unique.
/// * `operation_name` - Which operation to run when the document defines several
/// * `extensions` - Protocol metadata (e.g. persisted query hashes)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// GraphQL query text.
    pub query: String,

    /// GraphQL variables for the query.
    #[serde(default)]
    pub variables: Vec<Variable>,

    /// The name of the operation to execute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    /// Additional entries for protocol extensions.
    #[serde(default)]
    pub extensions: Vec<Variable>,
}

impl Input {
    /// Creates an input with the given query and no variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Appends a variable.
    pub fn variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.push(Variable::new(key, value));
        self
    }

    /// Sets the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Appends a protocol extension entry.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.push(Variable::new(key, value));
        self
    }
}

/// Failure handling, timeout and certificate policy for one execution.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `throw_error_on_failure` | `true` |
/// | `error_message_on_failure` | `""` (use the underlying cause) |
/// | `connection_timeout_seconds` | `30` |
/// | `allow_invalid_certificate` | `false` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Return the failure to the caller instead of a `success = false` result.
    pub throw_error_on_failure: bool,

    /// Replaces the error message on failure. Empty means "use the underlying cause".
    pub error_message_on_failure: String,

    /// Upper bound, in seconds, for connecting and for the whole request.
    ///
    /// `0` times out immediately.
    pub connection_timeout_seconds: u64,

    /// Skip TLS certificate validation.
    pub allow_invalid_certificate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            throw_error_on_failure: true,
            error_message_on_failure: String::new(),
            connection_timeout_seconds: 30,
            allow_invalid_certificate: false,
        }
    }
}

impl Options {
    /// Sets whether failures are returned as errors.
    pub fn throw_error_on_failure(mut self, throw: bool) -> Self {
        self.throw_error_on_failure = throw;
        self
    }

    /// Sets the message that replaces the underlying cause's message on failure.
    pub fn error_message_on_failure(mut self, message: impl Into<String>) -> Self {
        self.error_message_on_failure = message.into();
        self
    }

    /// Sets the connection and request timeout in seconds.
    pub fn connection_timeout_seconds(mut self, seconds: u64) -> Self {
        self.connection_timeout_seconds = seconds;
        self
    }

    /// Sets whether invalid TLS certificates are accepted.
    pub fn allow_invalid_certificate(mut self, allow: bool) -> Self {
        self.allow_invalid_certificate = allow;
        self
    }
}

/// Details of the failure behind an unsuccessful [`QueryResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// The user-facing message: the configured override, or the cause's message.
    pub message: String,
    /// The underlying cause.
    pub additional_info: AdditionalInfo,
}

/// The underlying cause of a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Which stage of the pipeline failed.
    pub kind: ErrorKind,
    /// The full cause chain, rendered as text.
    pub detail: String,
}

/// The normalized outcome of one execution.
///
/// On success `data` holds the parsed response object and `headers` the merged response
/// headers. On a reported failure `data` is absent, `headers` is empty and `error` is set.
///
/// GraphQL `errors` inside a parsed body are not inspected: such a response is still a
/// success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Whether the request completed and the body parsed as a JSON object.
    pub success: bool,
    /// The parsed response body.
    pub data: Option<Map<String, Value>>,
    /// The merged response headers.
    pub headers: Vec<Header>,
    /// The failure, when `success` is false.
    pub error: Option<ErrorInfo>,
}

impl QueryResult {
    pub(crate) fn succeeded(headers: Vec<Header>, data: Map<String, Value>) -> Self {
        Self {
            success: true,
            data: Some(data),
            headers,
            error: None,
        }
    }

    pub(crate) fn failed(error: ErrorInfo) -> Self {
        Self {
            success: false,
            data: None,
            headers: Vec::new(),
            error: Some(error),
        }
    }
}
