//
//  gqlx
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Turns the credentials on a [`Connection`](crate::definitions::Connection) into at most one
//! `Authorization` request header.
//!
//! ## Supported Authentication Methods
//!
//! - **None**: no header is sent.
//! - **Basic**: `Basic base64(username:password)`. Missing parts are treated as empty strings.
//! - **OAuth**: `Bearer <token>`. A missing token still produces the `Bearer ` prefix; the
//!   token is never validated.
//!
//! Resolution never fails: every credential field is optional.
//!
//! ## Example
//!
//! ```rust
//! use gqlx::auth::Authentication;
//!
//! let header = Authentication::basic("admin", "secret").authorization_header().unwrap();
//! assert_eq!(header.name, "Authorization");
//! assert_eq!(header.value, "Basic YWRtaW46c2VjcmV0");
//!
//! assert!(Authentication::None.authorization_header().is_none());
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::definitions::Header;

/// Name of the header carrying derived credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Request authentication scheme together with its credentials.
///
/// Credentials only exist on the variant that uses them, so a bearer token can never be
/// sent with Basic authentication by mistake.
///
/// In TOML request files the variant is selected with a `type` key:
///
/// ```toml
/// [connection.authentication]
/// type = "oauth"
/// bearer_token = "Token123"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Authentication {
    /// No authentication.
    #[default]
    None,

    /// HTTP Basic authentication.
    Basic {
        /// The username. Treated as empty when unset.
        #[serde(default)]
        username: Option<String>,
        /// The password. Treated as empty when unset.
        #[serde(default)]
        password: Option<String>,
    },

    /// Bearer token authentication.
    #[serde(rename = "oauth")]
    OAuth {
        /// The token sent after `Bearer `.
        #[serde(default)]
        bearer_token: Option<String>,
    },
}

impl Authentication {
    /// Creates Basic authentication with both credentials set.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Creates bearer token authentication.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::OAuth {
            bearer_token: Some(token.into()),
        }
    }

    /// Derives the `Authorization` header for this scheme.
    ///
    /// # Returns
    ///
    /// - `None` for [`Authentication::None`]
    /// - `Some(header)` with a `Basic` or `Bearer` value otherwise
    pub fn authorization_header(&self) -> Option<Header> {
        let value = match self {
            Self::None => return None,
            Self::Basic { username, password } => {
                let credentials = format!(
                    "{}:{}",
                    username.as_deref().unwrap_or_default(),
                    password.as_deref().unwrap_or_default()
                );
                format!("Basic {}", STANDARD.encode(credentials))
            }
            Self::OAuth { bearer_token } => {
                format!("Bearer {}", bearer_token.as_deref().unwrap_or_default())
            }
        };

        Some(Header::new(AUTHORIZATION, value))
    }

    /// Returns the scheme name used in logs. Never includes credentials.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::OAuth { .. } => "bearer",
        }
    }
}
