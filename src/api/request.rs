//
//  gqlx
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Construction
//!
//! Turns an [`Input`] and a [`Connection`] into a [`PreparedRequest`]: the final URL, the body
//! (if any) and the ordered list of headers to send.
//!
//! ## Wire Format
//!
//! **GET** puts everything in the query string:
//!
//! ```text
//! GET {endpoint}?query=<encoded query>&variables=<encoded {"key":"value",...}>
//! ```
//!
//! Every variable value is flattened to its string form, so `42` arrives as `"42"`.
//!
//! **POST** sends a typed JSON body with `Content-Type: application/json; charset=utf-8`:
//!
//! ```json
//! {"query": "...", "variables": {"key": 42}}
//! ```
//!
//! `operationName` and `extensions` are only added when the input sets them.
//!
//! ## Headers
//!
//! Caller headers go first, in order, then the derived `Authorization` header. Nothing is
//! deduplicated: a caller-supplied `Authorization` header is sent alongside the derived one.

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::definitions::{Connection, Header, Input, Method, Variable};

/// Content type used for POST bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A fully specified request, ready for a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub method: Method,
    /// The final URL, including the query string for GET.
    pub url: String,
    /// Headers in send order. May contain repeated names.
    pub headers: Vec<Header>,
    /// The serialized JSON body for POST, `None` for GET.
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Content type of the body, if there is one.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

/// Builds the request for `input` against `connection`.
///
/// The endpoint is used verbatim; it is the caller's job to reject an empty one before
/// calling this.
pub fn build_request(input: &Input, connection: &Connection) -> PreparedRequest {
    let (url, body) = match connection.method {
        Method::Get => (get_url(&connection.endpoint_url, input), None),
        Method::Post => (connection.endpoint_url.clone(), Some(post_body(input))),
    };

    let mut headers = connection.headers.clone();
    if let Some(auth) = connection.authentication.authorization_header() {
        headers.push(auth);
    }

    PreparedRequest {
        method: connection.method,
        url,
        headers,
        body,
    }
}

fn get_url(endpoint: &str, input: &Input) -> String {
    let mut url = format!(
        "{}?query={}&variables={}",
        endpoint,
        encode(&input.query),
        encode(&stringified_variables(&input.variables))
    );

    if let Some(name) = &input.operation_name {
        url.push_str("&operationName=");
        url.push_str(&encode(name));
    }

    if !input.extensions.is_empty() {
        let extensions = Value::Object(to_object(&input.extensions));
        url.push_str("&extensions=");
        url.push_str(&encode(&extensions.to_string()));
    }

    url
}

fn post_body(input: &Input) -> String {
    let mut body = Map::new();
    body.insert("query".to_string(), Value::from(input.query.as_str()));
    body.insert(
        "variables".to_string(),
        Value::Object(to_object(&input.variables)),
    );
    if let Some(name) = &input.operation_name {
        body.insert("operationName".to_string(), Value::from(name.as_str()));
    }
    if !input.extensions.is_empty() {
        body.insert(
            "extensions".to_string(),
            Value::Object(to_object(&input.extensions)),
        );
    }
    Value::Object(body).to_string()
}

/// Renders variables as a JSON object literal whose values are all strings.
///
/// Keys keep their input order. A repeated key appears twice. A null value is sent as
/// an empty string.
fn stringified_variables(variables: &[Variable]) -> String {
    let entries: Vec<String> = variables
        .iter()
        .map(|v| {
            let value = match &v.value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            format!("{}:{}", Value::from(v.key.as_str()), Value::String(value))
        })
        .collect();

    format!("{{{}}}", entries.join(","))
}

/// Collects variables into a typed JSON object. The last value wins for a repeated key.
fn to_object(variables: &[Variable]) -> Map<String, Value> {
    variables
        .iter()
        .map(|v| (v.key.clone(), v.value.clone()))
        .collect()
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
