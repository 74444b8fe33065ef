// Authentication module: one implementation per authentication scheme
// Author: Gabriel Demetrios Lafis

mod client_login;
mod oauth2;

pub use client_login::*;
pub use oauth2::*;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::{Transport, TransportError};

/// Capabilities shared by every authentication scheme
pub trait AuthMethod {
    /// Acquire a token from the service, replacing any token held
    fn fetch_token(&mut self, transport: &dyn Transport) -> Result<String, AuthError>;

    /// Get the current token, if one has been acquired or supplied
    fn token(&self) -> Option<&str>;

    /// Build the header that authorizes a request
    fn header(&self) -> Result<AuthHeader, AuthError>;

    /// Invalidate the current token at the service
    fn revoke_token(&mut self, transport: &dyn Transport) -> Result<(), AuthError>;

    /// Ask the service what the current token grants
    fn token_info(&self, transport: &dyn Transport) -> Result<TokenInfo, AuthError>;

    /// Get the scheme name
    fn scheme(&self) -> &str;
}

/// A single request header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub name: String,
    pub value: String,
}

impl AuthHeader {
    /// Create an `Authorization` header
    pub fn authorization(value: String) -> Self {
        AuthHeader {
            name: "Authorization".to_string(),
            value,
        }
    }
}

/// What the service reports about a token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub issued_to: Option<String>,
    pub audience: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<i64>,
    pub email: Option<String>,
    pub access_type: Option<String>,
}

/// Parse a newline-delimited `key=value` body
pub fn parse_key_values(body: &str) -> HashMap<String, String> {
    body.lines()
        .filter_map(|line| {
            let (key, value) = line.trim().split_once('=')?;
            let value = urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some((key.to_string(), value))
        })
        .collect()
}

/// Represents an error in the auth module
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to authenticate: no \"{field}\" in response \"{body}\"")]
    MissingCredential { field: String, body: String },
    #[error("No token has been acquired")]
    NoToken,
    #[error("Not supported: {0}")]
    Unsupported(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
