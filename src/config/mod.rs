//
//  gqlx
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads the values the `gqlx` binary passes to the execution pipeline. Settings are
//! layered, later layers winning field by field:
//!
//! 1. Built-in [`Options`] defaults
//! 2. The user configuration file ([`Config`])
//! 3. A request file given with `--request` ([`RequestFile`])
//! 4. Command-line flags
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gqlx/config.toml`
//! - **macOS**: `~/Library/Application Support/gqlx/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gqlx\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [options]
//! connection_timeout_seconds = 10
//! throw_error_on_failure = false
//!
//! [[headers]]
//! name = "X-Client"
//! value = "gqlx"
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file reads
//! - [`request`]: Request files describing a complete execution

mod file;
mod request;

pub use file::*;
pub use request::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::definitions::{Header, Options};

/// User-level defaults applied to every execution started from the command line.
///
/// # Fields
///
/// * `options` - Option overrides applied on top of the built-in defaults
/// * `headers` - Headers sent before any request-specific header
///
/// # Examples
///
/// ```rust
/// use gqlx::config::Config;
///
/// let config = Config::default();
/// assert!(config.headers.is_empty());
/// assert_eq!(config.options().connection_timeout_seconds, 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Option overrides.
    #[serde(default)]
    pub options: OptionsFile,

    /// Default request headers.
    #[serde(default)]
    pub headers: Vec<Header>,
}

/// A partial set of [`Options`], as found in configuration and request files.
///
/// Only the fields that are present override the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsFile {
    /// Overrides [`Options::throw_error_on_failure`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throw_error_on_failure: Option<bool>,

    /// Overrides [`Options::error_message_on_failure`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message_on_failure: Option<String>,

    /// Overrides [`Options::connection_timeout_seconds`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_timeout_seconds: Option<u64>,

    /// Overrides [`Options::allow_invalid_certificate`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_invalid_certificate: Option<bool>,
}

impl OptionsFile {
    /// Applies the present fields on top of `base`.
    pub fn apply(&self, mut base: Options) -> Options {
        if let Some(throw) = self.throw_error_on_failure {
            base.throw_error_on_failure = throw;
        }
        if let Some(message) = &self.error_message_on_failure {
            base.error_message_on_failure = message.clone();
        }
        if let Some(seconds) = self.connection_timeout_seconds {
            base.connection_timeout_seconds = seconds;
        }
        if let Some(allow) = self.allow_invalid_certificate {
            base.allow_invalid_certificate = allow;
        }
        base
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Returns the path to the configuration file. The file may not exist.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "gqlx")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The built-in defaults with this file's overrides applied.
    pub fn options(&self) -> Options {
        self.options.apply(Options::default())
    }
}
