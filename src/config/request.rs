//
//  gqlx
//  config/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request files: a complete execution described in TOML.
//!
//! ```toml
//! [input]
//! query = "query ($surname: String!) { users(surname: $surname) { name } }"
//!
//! [[input.variables]]
//! key = "surname"
//! value = "Doe"
//!
//! [connection]
//! endpoint_url = "http://localhost:4000"
//! method = "post"
//!
//! [connection.authentication]
//! type = "basic"
//! username = "admin"
//! password = "secret"
//!
//! [options]
//! throw_error_on_failure = false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{read_config_file, OptionsFile};
use crate::definitions::{Connection, Input};

/// An execution loaded from disk. Every table is optional so flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFile {
    /// The operation to run.
    #[serde(default)]
    pub input: Option<Input>,

    /// Where to send it.
    #[serde(default)]
    pub connection: Option<Connection>,

    /// Option overrides.
    #[serde(default)]
    pub options: OptionsFile,
}

impl RequestFile {
    /// Reads and parses a request file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or names an unsupported
    /// HTTP method.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_config_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid request file {}", path.display()))
    }

    /// Parses request file contents.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
