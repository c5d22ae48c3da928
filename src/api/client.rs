//
//  gqlx
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Query Execution
//!
//! Runs one GraphQL operation through the whole pipeline and decides what the caller sees
//! when something goes wrong.
//!
//! ## Pipeline
//!
//! 1. Reject an empty endpoint
//! 2. Build the request (authentication header included)
//! 3. Send it, bounded by the timeout and the cancellation token
//! 4. Merge headers and parse the body
//!
//! ## Failure Handling
//!
//! Any failure in any step is classified once, at the end:
//!
//! - `throw_error_on_failure = true`: the failure is returned as `Err(QueryFailure)`
//! - `throw_error_on_failure = false`: `Ok(QueryResult)` with `success = false`
//!
//! In both cases the message is `error_message_on_failure` when it is non-empty, and the
//! underlying cause's message otherwise.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gqlx::api::execute_query;
//! use gqlx::definitions::{Connection, Input, Method, Options};
//! use gqlx::CancellationToken;
//!
//! # async fn example() -> Result<(), gqlx::api::QueryFailure> {
//! let input = Input::new("{users{name}}");
//! let connection = Connection::new("http://localhost:4000").method(Method::Get);
//! let options = Options::default().throw_error_on_failure(false);
//!
//! let result = execute_query(&input, &connection, &options, &CancellationToken::new()).await?;
//! if result.success {
//!     println!("{}", serde_json::to_string_pretty(&result.data).unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::error::{ExecuteError, QueryFailure};
use super::request::build_request;
use super::response::{normalize, NormalizedResponse};
use super::transport::{ReqwestTransport, Transport};
use crate::definitions::{AdditionalInfo, Connection, ErrorInfo, Input, Options, QueryResult};

/// Executes one operation over HTTP using a [`ReqwestTransport`] configured from `options`.
///
/// # Errors
///
/// Returns `Err` only when `options.throw_error_on_failure` is set; otherwise every failure
/// is reported inside the returned [`QueryResult`].
pub async fn execute_query(
    input: &Input,
    connection: &Connection,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<QueryResult, QueryFailure> {
    let outcome = match ReqwestTransport::new(options) {
        Ok(transport) => run(&transport, input, connection, options, cancel).await,
        Err(err) => Err(err),
    };

    classify(outcome, options)
}

/// Executes one operation through the given transport.
///
/// Behaves exactly like [`execute_query`], including the timeout and cancellation
/// handling, but lets the caller supply the [`Transport`].
pub async fn execute_query_with<T>(
    transport: &T,
    input: &Input,
    connection: &Connection,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<QueryResult, QueryFailure>
where
    T: Transport + ?Sized,
{
    let outcome = run(transport, input, connection, options, cancel).await;
    classify(outcome, options)
}

fn validate(connection: &Connection) -> Result<(), ExecuteError> {
    if connection.endpoint_url.is_empty() {
        return Err(ExecuteError::EmptyEndpoint);
    }
    Ok(())
}

/// The endpoint as it may appear in logs: no userinfo, no query string.
pub(crate) fn redacted(endpoint: &str) -> String {
    match url::Url::parse(endpoint) {
        Ok(mut url) => {
            strip_credentials(&mut url);
            url.set_query(None);
            url.to_string()
        }
        Err(_) => "<invalid url>".to_string(),
    }
}

/// Removes the username and password from `url`.
pub(crate) fn strip_credentials(url: &mut url::Url) {
    // Fails only for URLs that cannot carry credentials.
    let _ = url.set_username("");
    let _ = url.set_password(None);
}

async fn run<T>(
    transport: &T,
    input: &Input,
    connection: &Connection,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<NormalizedResponse, ExecuteError>
where
    T: Transport + ?Sized,
{
    validate(connection)?;

    let request = build_request(input, connection);
    tracing::debug!(
        "Sending {} request to {} (auth: {}, {} headers)",
        request.method,
        redacted(&connection.endpoint_url),
        connection.authentication.scheme(),
        request.headers.len()
    );

    let timeout = Duration::from_secs(options.connection_timeout_seconds);
    let started = Instant::now();

    let raw = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ExecuteError::Cancelled),
        sent = tokio::time::timeout(timeout, transport.send(request)) => match sent {
            Ok(response) => response?,
            Err(_) => return Err(ExecuteError::Timeout(options.connection_timeout_seconds)),
        },
    };

    tracing::debug!(
        "Received status {} after {} ms",
        raw.status,
        started.elapsed().as_millis()
    );

    normalize(raw)
}

fn classify(
    outcome: Result<NormalizedResponse, ExecuteError>,
    options: &Options,
) -> Result<QueryResult, QueryFailure> {
    let cause = match outcome {
        Ok(response) => return Ok(QueryResult::succeeded(response.headers, response.data)),
        Err(cause) => cause,
    };

    let message = if options.error_message_on_failure.is_empty() {
        cause.to_string()
    } else {
        options.error_message_on_failure.clone()
    };

    if options.throw_error_on_failure {
        tracing::debug!("Propagating {} failure: {}", cause.kind(), cause);
        return Err(QueryFailure::new(message, cause));
    }

    tracing::warn!("Query failed ({}): {}", cause.kind(), cause);
    Ok(QueryResult::failed(ErrorInfo {
        message,
        additional_info: AdditionalInfo {
            kind: cause.kind(),
            detail: cause.detail(),
        },
    }))
}
