//
//  gqlx
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Thin helpers for reading the TOML files used by [`Config`](super::Config)
//! and [`RequestFile`](super::RequestFile).
//!
//! All functions return `anyhow::Result` with the offending path attached as context.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Fails if the file does not exist, cannot be opened, or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Checks if a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
