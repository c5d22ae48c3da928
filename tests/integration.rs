//
//  gqlx
//  tests/integration.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests against a mock GraphQL server.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD, Engine};
use mockito::{Matcher, Server};
use serde_json::{json, Value};

use gqlx::{
    execute_query, Authentication, CancellationToken, Connection, ErrorKind, Input, Method,
    Options, QueryResult,
};

const SIMPLE_QUERY: &str = "{users{name}}";
const ADVANCED_QUERY: &str = "query ($surname: String!) {users(surname: $surname) {name}}";

const ALL_USERS: &str = r#"{"data":{"users":[{"name":"John"},{"name":"Marry"},{"name":"Marry"}]}}"#;
const DOE_USERS: &str = r#"{"data":{"users":[{"name":"John"},{"name":"Marry"}]}}"#;

fn reporting() -> Options {
    Options::default().throw_error_on_failure(false)
}

fn data(result: &QueryResult) -> Value {
    Value::Object(result.data.clone().unwrap_or_default())
}

#[tokio::test]
async fn test_simple_query_over_get() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::UrlEncoded("query".into(), SIMPLE_QUERY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ALL_USERS)
        .create_async()
        .await;

    let connection = Connection::new(server.url()).method(Method::Get);
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &connection,
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(data(&result), serde_json::from_str::<Value>(ALL_USERS).unwrap());
}

#[tokio::test]
async fn test_variables_over_post() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .match_header("content-type", "application/json; charset=utf-8")
        .match_body(Matcher::Json(json!({
            "query": ADVANCED_QUERY,
            "variables": {"surname": "Doe"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DOE_USERS)
        .create_async()
        .await;

    let input = Input::new(ADVANCED_QUERY).variable("surname", "Doe");
    let connection = Connection::new(format!("{}/graphql", server.url()));
    let result = execute_query(&input, &connection, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert_eq!(data(&result), serde_json::from_str::<Value>(DOE_USERS).unwrap());
}

#[tokio::test]
async fn test_variables_over_get_match_post() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), ADVANCED_QUERY.into()),
            Matcher::UrlEncoded("variables".into(), r#"{"surname":"Doe"}"#.into()),
        ]))
        .with_body(DOE_USERS)
        .create_async()
        .await;
    let post = server
        .mock("POST", "/")
        .with_body(DOE_USERS)
        .create_async()
        .await;

    let input = Input::new(ADVANCED_QUERY).variable("surname", "Doe");
    let options = reporting();
    let cancel = CancellationToken::new();

    let over_get = execute_query(
        &input,
        &Connection::new(server.url()).method(Method::Get),
        &options,
        &cancel,
    )
    .await
    .unwrap();
    let over_post = execute_query(
        &input,
        &Connection::new(server.url()).method(Method::Post),
        &options,
        &cancel,
    )
    .await
    .unwrap();

    get.assert_async().await;
    post.assert_async().await;
    assert!(over_get.success && over_post.success);
    assert_eq!(over_get.data, over_post.data);
}

#[tokio::test]
async fn test_basic_credentials_are_echoed() {
    let mut server = Server::new_async().await;
    let expected = format!("Basic {}", STANDARD.encode("invalid-user:invalid-secret"));
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", expected.as_str())
        .with_status(200)
        .with_body(
            json!({
                "data": null,
                "errors": [{
                    "message": "Invalid Basic credentials. Username: invalid-user Password: invalid-secret"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let connection = Connection::new(server.url())
        .authentication(Authentication::basic("invalid-user", "invalid-secret"));
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &connection,
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    // GraphQL-level errors are part of a successful response.
    assert!(result.success);
    let body = data(&result).to_string();
    assert!(body.contains("invalid-user"));
    assert!(body.contains("invalid-secret"));
}

#[tokio::test]
async fn test_bearer_token_is_echoed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer invalid-oauth-token")
        .with_body(r#"{"errors":[{"message":"Invalid OAuth token: invalid-oauth-token"}]}"#)
        .create_async()
        .await;

    let connection =
        Connection::new(server.url()).authentication(Authentication::bearer("invalid-oauth-token"));
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &connection,
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert!(data(&result).to_string().contains("invalid-oauth-token"));
}

#[tokio::test]
async fn test_custom_header_is_sent_and_echoed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("foo", "Baz")
        .match_header("authorization", Matcher::Missing)
        .with_body(r#"{"errors":[{"message":"Invalid header value. Foo: Baz"}]}"#)
        .create_async()
        .await;

    let connection = Connection::new(server.url()).header("Foo", "Baz");
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &connection,
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert!(data(&result).to_string().contains("Foo: Baz"));
}

#[tokio::test]
async fn test_response_headers_are_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_header("x-request-id", "req-1")
        .with_body(ALL_USERS)
        .create_async()
        .await;

    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &Connection::new(server.url()),
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    let header = |name: &str| {
        result
            .headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.clone())
    };
    assert_eq!(header("content-type").as_deref(), Some("application/json"));
    assert_eq!(header("x-request-id").as_deref(), Some("req-1"));
}

#[tokio::test]
async fn test_non_success_status_with_json_body_is_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(400)
        .with_body(r#"{"errors":[{"message":"Syntax Error"}]}"#)
        .create_async()
        .await;

    let result = execute_query(
        &Input::new("{users{"),
        &Connection::new(server.url()),
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(result.success);
    assert_eq!(data(&result)["errors"][0]["message"], "Syntax Error");
}

#[tokio::test]
async fn test_empty_endpoint_fails_for_both_methods() {
    for method in [Method::Get, Method::Post] {
        let connection = Connection::new("").method(method);

        let failure = execute_query(
            &Input::new(SIMPLE_QUERY),
            &connection,
            &Options::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(failure.message(), "Url can not be empty.");
        assert_eq!(failure.kind(), ErrorKind::Configuration);

        let result = execute_query(
            &Input::new(SIMPLE_QUERY),
            &connection,
            &reporting(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
        assert!(!result.success);
        assert!(result.data.is_none());
        let error = result.error.unwrap();
        assert_eq!(error.message, "Url can not be empty.");
        assert_eq!(error.additional_info.kind, ErrorKind::Configuration);
    }
}

#[tokio::test]
async fn test_zero_timeout_against_slow_server() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_chunked_body(|w| {
            std::thread::sleep(std::time::Duration::from_secs(1));
            w.write_all(ALL_USERS.as_bytes())
        })
        .create_async()
        .await;

    let connection = Connection::new(server.url()).method(Method::Get);
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &connection,
        &reporting().connection_timeout_seconds(0),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(!result.success);
    let error = result.error.unwrap();
    assert_eq!(error.additional_info.kind, ErrorKind::Transport);
    assert!(error.message.contains("timed out"));
}

#[tokio::test]
async fn test_custom_failure_message_keeps_detail() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let options = reporting().error_message_on_failure("GraphQL endpoint misbehaved");
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &Connection::new(server.url()),
        &options,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(!result.success);
    let error = result.error.unwrap();
    assert_eq!(error.message, "GraphQL endpoint misbehaved");
    assert_eq!(error.additional_info.kind, ErrorKind::Normalization);
    assert!(error.additional_info.detail.contains("not a valid JSON object"));
}

#[tokio::test]
async fn test_json_array_body_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_body("[1, 2, 3]")
        .create_async()
        .await;

    let failure = execute_query(
        &Input::new(SIMPLE_QUERY),
        &Connection::new(server.url()),
        &Options::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap_err();

    assert_eq!(failure.kind(), ErrorKind::Normalization);
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    // Nothing listens on port 1.
    let connection = Connection::new("http://127.0.0.1:1");
    let result = execute_query(
        &Input::new(SIMPLE_QUERY),
        &connection,
        &reporting().connection_timeout_seconds(5),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(!result.success);
    assert_eq!(result.error.unwrap().additional_info.kind, ErrorKind::Transport);
}

#[tokio::test]
async fn test_repeated_queries_are_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_body(ALL_USERS)
        .expect(2)
        .create_async()
        .await;

    let input = Input::new(SIMPLE_QUERY);
    let connection = Connection::new(server.url());
    let cancel = CancellationToken::new();

    let first = execute_query(&input, &connection, &Options::default(), &cancel)
        .await
        .unwrap();
    let second = execute_query(&input, &connection, &Options::default(), &cancel)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(first.data, second.data);
}
