//
//  gqlx
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests for the `gqlx` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `gqlx` command isolated from the user's environment and configuration.
fn gqlx(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gqlx").unwrap();
    cmd.env("GQLX_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("GQLX_ENDPOINT")
        .env_remove("GQLX_TOKEN")
        .env_remove("GQLX_DEBUG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gqlx version "));
}

#[test]
fn test_completion_bash() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlx"));
}

#[test]
fn test_empty_endpoint_exits_with_error() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .args(["query", "", "--query", "{users{name}}"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: Url can not be empty."));
}

#[test]
fn test_empty_endpoint_reported_with_no_throw() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .args(["query", "", "--query", "{users{name}}", "--no-throw", "--compact"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""success":false"#))
        .stdout(predicate::str::contains(r#""kind":"configuration""#));
}

#[test]
fn test_missing_query_is_usage_error() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .args(["query", "http://localhost:4000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No query given"));
}

#[test]
fn test_unsupported_method_is_usage_error() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .args(["query", "http://localhost:4000", "-X", "put", "--query", "{a}"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported HTTP method: put"));
}

#[test]
fn test_no_color_env_conventions_are_accepted() {
    let dir = TempDir::new().unwrap();
    for value in ["1", "true", "yes", ""] {
        gqlx(&dir)
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("gqlx version "));
    }
}

#[test]
fn test_no_color_does_not_mask_query_errors() {
    let dir = TempDir::new().unwrap();
    gqlx(&dir)
        .env("NO_COLOR", "1")
        .args(["query", "", "--query", "{users{name}}"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: Url can not be empty."))
        .stderr(predicate::str::contains("--no-color").not());
}

#[test]
fn test_query_against_server() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("foo", "Bar")
        .with_header("content-type", "application/json")
        .with_header("x-request-id", "req-1")
        .with_body(r#"{"data":{"users":[{"name":"John"}]}}"#)
        .create();

    gqlx(&dir)
        .args([
            "query",
            server.url().as_str(),
            "--query",
            "{users{name}}",
            "-H",
            "Foo: Bar",
            "--include",
            "--compact",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success":true"#))
        .stdout(predicate::str::contains(r#""users":[{"name":"John"}]"#))
        .stderr(predicate::str::contains("x-request-id"));

    mock.assert();
}

#[test]
fn test_request_file_with_config_headers() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .match_query(mockito::Matcher::UrlEncoded(
            "variables".into(),
            r#"{"surname":"Doe"}"#.into(),
        ))
        .match_header("x-client", "gqlx")
        .with_body(r#"{"data":{"users":[{"name":"John"},{"name":"Marry"}]}}"#)
        .create();

    std::fs::write(
        dir.path().join("config.toml"),
        "[[headers]]\nname = \"X-Client\"\nvalue = \"gqlx\"\n",
    )
    .unwrap();

    let request = dir.path().join("users.toml");
    std::fs::write(
        &request,
        format!(
            r#"
            [input]
            query = "query ($surname: String!) {{users(surname: $surname) {{name}}}}"

            [[input.variables]]
            key = "surname"
            value = "Doe"

            [connection]
            endpoint_url = "{}"
            method = "get"
            "#,
            server.url()
        ),
    )
    .unwrap();

    gqlx(&dir)
        .args(["query", "--request"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Marry"));

    mock.assert();
}
