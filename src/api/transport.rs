//
//  gqlx
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The [`Transport`] trait is the only place the pipeline touches the network. The
//! production implementation, [`ReqwestTransport`], is built from [`Options`] for a single
//! execution; tests plug in their own implementation.
//!
//! A transport makes exactly one attempt per request. It never retries and never
//! interprets the status code.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use super::error::ExecuteError;
use super::request::PreparedRequest;
use crate::definitions::{Header, Method, Options};

/// Entity headers that describe the body rather than the response.
///
/// These are reported separately from the other response headers so the normalizer can
/// apply its precedence rule.
pub const CONTENT_HEADERS: &[&str] = &[
    "allow",
    "content-disposition",
    "content-encoding",
    "content-language",
    "content-length",
    "content-location",
    "content-md5",
    "content-range",
    "content-type",
    "expires",
    "last-modified",
];

/// Returns true when `name` is one of [`CONTENT_HEADERS`], ignoring case.
pub fn is_content_header(name: &str) -> bool {
    CONTENT_HEADERS
        .iter()
        .any(|h| h.eq_ignore_ascii_case(name))
}

/// A response as received, before normalization.
///
/// Headers are listed once per value; a header sent twice appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code. Any value is accepted.
    pub status: u16,
    /// Response-level headers.
    pub headers: Vec<Header>,
    /// Content-level headers (see [`CONTENT_HEADERS`]).
    pub content_headers: Vec<Header>,
    /// The full body, decoded as text.
    pub body: String,
}

/// Sends a prepared request and waits for the complete response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` once and returns the raw response.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ExecuteError>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// The client is configured from [`Options`]:
/// - `connection_timeout_seconds` is used both as the connect timeout and as the total
///   request timeout (including reading the body)
/// - `allow_invalid_certificate` disables TLS certificate validation
pub struct ReqwestTransport {
    http: Client,
    timeout_seconds: u64,
}

impl ReqwestTransport {
    /// Creates a transport for one execution.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn new(options: &Options) -> Result<Self, ExecuteError> {
        let timeout = Duration::from_secs(options.connection_timeout_seconds);
        let http = Client::builder()
            .user_agent(format!("gqlx/{}", crate::VERSION))
            .connect_timeout(timeout)
            .timeout(timeout)
            .danger_accept_invalid_certs(options.allow_invalid_certificate)
            .build()
            .map_err(ExecuteError::ClientBuild)?;

        Ok(Self {
            http,
            timeout_seconds: options.connection_timeout_seconds,
        })
    }

    fn classify(&self, mut err: reqwest::Error) -> ExecuteError {
        if let Some(url) = err.url_mut() {
            super::client::strip_credentials(url);
        }
        if err.is_timeout() {
            ExecuteError::Timeout(self.timeout_seconds)
        } else {
            ExecuteError::Request(err)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ExecuteError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let headers = to_header_map(&request.headers)?;
        let mut builder = self.http.request(method, &request.url).headers(headers);

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, super::request::JSON_CONTENT_TYPE)
                .body(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();

        let mut headers = Vec::new();
        let mut content_headers = Vec::new();
        for (name, value) in response.headers() {
            let header = Header::new(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
            if is_content_header(name.as_str()) {
                content_headers.push(header);
            } else {
                headers.push(header);
            }
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;

        Ok(RawResponse {
            status,
            headers,
            content_headers,
            body,
        })
    }
}

/// Converts headers to a `HeaderMap`, keeping repeated names as separate entries.
fn to_header_map(headers: &[Header]) -> Result<HeaderMap, ExecuteError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for header in headers {
        let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|e| {
            ExecuteError::InvalidHeader {
                name: header.name.clone(),
                reason: e.to_string(),
            }
        })?;
        let value = HeaderValue::from_str(&header.value).map_err(|e| {
            ExecuteError::InvalidHeader {
                name: header.name.clone(),
                reason: e.to_string(),
            }
        })?;
        map.append(name, value);
    }
    Ok(map)
}
