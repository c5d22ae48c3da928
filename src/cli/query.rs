//
//  gqlx
//  cli/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query command
//!
//! Assembles an [`Input`], [`Connection`] and [`Options`] from the user configuration, an
//! optional request file and the flags, runs the operation once and prints the result.
//!
//! ## Examples
//!
//! ```bash
//! # Simple query over GET
//! gqlx query http://localhost:4000 -X get --query '{users{name}}'
//!
//! # Variables are parsed as JSON when possible
//! gqlx query http://localhost:4000 \
//!     --query 'query ($surname: String!) {users(surname: $surname) {name}}' \
//!     --var surname=Doe
//!
//! # Basic authentication and a custom header
//! gqlx query https://api.example.com/graphql --query-file users.graphql \
//!     --basic admin:secret -H 'Foo: Bar'
//!
//! # Everything from a request file, reporting failures instead of exiting early
//! gqlx query --request users.toml --no-throw --include
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::{GlobalOptions, UsageError};
use crate::api::execute_query;
use crate::auth::Authentication;
use crate::config::{Config, RequestFile};
use crate::definitions::{Connection, Header, Input, Method, Options, Variable};
use crate::exit_codes;
use crate::output::OutputWriter;

/// Execute a GraphQL operation
#[derive(Args, Debug, Default)]
pub struct QueryCommand {
    /// GraphQL endpoint URL
    #[arg(env = "GQLX_ENDPOINT")]
    pub endpoint: Option<String>,

    /// GraphQL document text
    #[arg(long, short = 'q', conflicts_with = "query_file")]
    pub query: Option<String>,

    /// Read the GraphQL document from a file (- for stdin)
    #[arg(long, short = 'f')]
    pub query_file: Option<PathBuf>,

    /// Variables as key=value (can be specified multiple times)
    #[arg(long = "var", short = 'v', action = clap::ArgAction::Append)]
    pub vars: Vec<String>,

    /// Protocol extensions as key=value (can be specified multiple times)
    #[arg(long = "extension", action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Operation to run when the document defines several
    #[arg(long)]
    pub operation_name: Option<String>,

    /// HTTP method (get, post)
    #[arg(long, short = 'X')]
    pub method: Option<Method>,

    /// Request headers as 'Name: Value' (can be specified multiple times)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Basic authentication as user:password (takes precedence over --bearer)
    #[arg(long)]
    pub basic: Option<String>,

    /// OAuth bearer token
    #[arg(long, env = "GQLX_TOKEN", hide_env_values = true)]
    pub bearer: Option<String>,

    /// Connect and total timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k')]
    pub insecure: bool,

    /// Report failures in the result instead of exiting with an error
    #[arg(long)]
    pub no_throw: bool,

    /// Message to report instead of the underlying error
    #[arg(long)]
    pub error_message: Option<String>,

    /// Load input, connection and options from a TOML request file
    #[arg(long, short = 'r')]
    pub request: Option<PathBuf>,

    /// Print the merged response headers to stderr
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Print the result on a single line
    #[arg(long)]
    pub compact: bool,
}

impl QueryCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<i32> {
        let config = global.load_config()?;
        let file = match &self.request {
            Some(path) => RequestFile::load(path)?,
            None => RequestFile::default(),
        };
        let query_text = self.read_query_file()?;
        let (input, connection, options) = self.resolve(&config, file, query_text)?;

        let writer = OutputWriter::new(self.compact).plain(global.no_color);

        let cancel = CancellationToken::new();
        let signal = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                signal.cancel();
            }
        });

        match execute_query(&input, &connection, &options, &cancel).await {
            Ok(result) => {
                writer.write_result(&result)?;
                if self.include {
                    writer.write_headers(&result.headers);
                }
                if result.success {
                    Ok(exit_codes::SUCCESS)
                } else {
                    Ok(exit_codes::ERROR)
                }
            }
            Err(failure) => {
                writer.write_error(failure.message());
                Ok(exit_codes::ERROR)
            }
        }
    }

    /// Layers user configuration, request file and flags into the pipeline inputs.
    fn resolve(
        &self,
        config: &Config,
        file: RequestFile,
        query_text: Option<String>,
    ) -> Result<(Input, Connection, Options)> {
        let input = self.resolve_input(file.input, query_text)?;
        let connection = self.resolve_connection(config, file.connection)?;

        let mut options = file.options.apply(config.options());
        if let Some(seconds) = self.timeout {
            options.connection_timeout_seconds = seconds;
        }
        if self.insecure {
            options.allow_invalid_certificate = true;
        }
        if self.no_throw {
            options.throw_error_on_failure = false;
        }
        if let Some(message) = &self.error_message {
            options.error_message_on_failure = message.clone();
        }

        Ok((input, connection, options))
    }

    fn resolve_input(&self, base: Option<Input>, query_text: Option<String>) -> Result<Input> {
        let query = query_text.or_else(|| self.query.clone());
        let mut input = match (base, query) {
            (Some(mut input), Some(query)) => {
                input.query = query;
                input
            }
            (Some(input), None) => input,
            (None, Some(query)) => Input::new(query),
            (None, None) => {
                return Err(UsageError::new(
                    "No query given. Use --query, --query-file or --request",
                )
                .into())
            }
        };

        for field in &self.vars {
            let (key, value) = parse_field(field)?;
            upsert(&mut input.variables, key, value);
        }
        for field in &self.extensions {
            let (key, value) = parse_field(field)?;
            upsert(&mut input.extensions, key, value);
        }
        if let Some(name) = &self.operation_name {
            input.operation_name = Some(name.clone());
        }

        Ok(input)
    }

    fn resolve_connection(&self, config: &Config, base: Option<Connection>) -> Result<Connection> {
        let mut connection = base.unwrap_or_default();

        if let Some(endpoint) = &self.endpoint {
            connection.endpoint_url = endpoint.clone();
        }
        if let Some(method) = self.method {
            connection.method = method;
        }

        let mut headers = config.headers.clone();
        headers.append(&mut connection.headers);
        for header in &self.header {
            headers.push(parse_header(header)?);
        }
        connection.headers = headers;

        if let Some(credentials) = &self.basic {
            connection.authentication = parse_basic(credentials);
        } else if let Some(token) = &self.bearer {
            connection.authentication = Authentication::bearer(token.as_str());
        }

        Ok(connection)
    }

    fn read_query_file(&self) -> Result<Option<String>> {
        let Some(path) = &self.query_file else {
            return Ok(None);
        };

        let content = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
                .context("Failed to read query from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        };

        Ok(Some(content))
    }
}

/// Parses `key=value`, reading the value as JSON when it is valid JSON and as a string
/// otherwise.
fn parse_field(field: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = field.split_once('=') else {
        return Err(UsageError::new(format!(
            "Invalid field format: {field}. Expected key=value"
        ))
        .into());
    };

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn parse_header(header: &str) -> Result<Header> {
    match header.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok(Header::new(name.trim(), value.trim()))
        }
        _ => Err(UsageError::new(format!(
            "Invalid header format: {header}. Expected 'Name: Value'"
        ))
        .into()),
    }
}

/// `user:password` splits at the first colon; without one the password is absent.
fn parse_basic(credentials: &str) -> Authentication {
    match credentials.split_once(':') {
        Some((username, password)) => Authentication::basic(username, password),
        None => Authentication::Basic {
            username: Some(credentials.to_string()),
            password: None,
        },
    }
}

fn upsert(variables: &mut Vec<Variable>, key: String, value: Value) {
    match variables.iter_mut().find(|variable| variable.key == key) {
        Some(existing) => existing.value = value,
        None => variables.push(Variable::new(key, value)),
    }
}
