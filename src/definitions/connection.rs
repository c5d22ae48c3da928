//
//  gqlx
//  definitions/connection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connection parameters: endpoint, HTTP method, authentication and extra headers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Header;
use crate::api::error::ExecuteError;
use crate::auth::Authentication;

/// The HTTP method used to send the operation.
///
/// `Get` puts the query and variables in the URL; `Post` sends a JSON body.
///
/// # Example
///
/// ```rust
/// use gqlx::definitions::Method;
///
/// assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
/// assert!("PUT".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    #[default]
    Post,
}

impl Method {
    /// Returns the method as the uppercase HTTP token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ExecuteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            _ => Err(ExecuteError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = ExecuteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where and how to send the operation.
///
/// # Fields
///
/// * `endpoint_url` - URL of the GraphQL server. Must be non-empty.
/// * `authentication` - How to derive the `Authorization` header
/// * `method` - GET or POST (default POST)
/// * `headers` - Extra request headers, sent verbatim and in order
///
/// # Example
///
/// ```rust
/// use gqlx::auth::Authentication;
/// use gqlx::definitions::{Connection, Method};
///
/// let connection = Connection::new("https://api.example.com/graphql")
///     .method(Method::Post)
///     .authentication(Authentication::bearer("token"))
///     .header("X-Request-Id", "42");
///
/// assert_eq!(connection.headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Url to the GraphQL server.
    #[serde(default)]
    pub endpoint_url: String,

    /// Method of authenticating the request.
    #[serde(default)]
    pub authentication: Authentication,

    /// The HTTP method to be used with the request.
    #[serde(default)]
    pub method: Method,

    /// HTTP headers to be added to the request.
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl Connection {
    /// Creates a POST connection without authentication or extra headers.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Default::default()
        }
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the authentication scheme.
    pub fn authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = authentication;
        self
    }

    /// Appends a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }
}
