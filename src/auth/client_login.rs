// Email/password authentication
// Author: Gabriel Demetrios Lafis

use log::info;

use super::{parse_key_values, AuthError, AuthHeader, AuthMethod, TokenInfo};
use crate::transport::{strip_tags, HttpRequest, Transport};
use crate::utils::ServiceConfig;

/// Authenticates with an account email and password
pub struct ClientLogin {
    email: String,
    password: String,
    login_url: String,
    source: String,
    token: Option<String>,
}

impl ClientLogin {
    /// Create a new login for an account
    pub fn new(email: &str, password: &str, config: &ServiceConfig) -> Self {
        ClientLogin {
            email: email.to_string(),
            password: password.to_string(),
            login_url: config.client_login_url.clone(),
            source: config.interface_name.clone(),
            token: None,
        }
    }

    /// Reuse a previously stored token instead of logging in again
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn form(&self) -> Vec<(String, String)> {
        vec![
            ("accountType".to_string(), "GOOGLE".to_string()),
            ("Email".to_string(), self.email.clone()),
            ("Passwd".to_string(), self.password.clone()),
            ("source".to_string(), self.source.clone()),
            ("service".to_string(), "analytics".to_string()),
        ]
    }
}

impl AuthMethod for ClientLogin {
    fn fetch_token(&mut self, transport: &dyn Transport) -> Result<String, AuthError> {
        info!("Logging in as {}", self.email);

        let request = HttpRequest::post(&self.login_url, self.form());
        let body = transport.request(&request)?.into_success()?;

        let token = parse_key_values(&body)
            .remove("Auth")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::MissingCredential {
                field: "Auth".to_string(),
                body: strip_tags(&body),
            })?;

        self.token = Some(token.clone());
        Ok(token)
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn header(&self) -> Result<AuthHeader, AuthError> {
        let token = self.token.as_deref().ok_or(AuthError::NoToken)?;
        Ok(AuthHeader::authorization(format!("GoogleLogin auth={}", token)))
    }

    fn revoke_token(&mut self, _transport: &dyn Transport) -> Result<(), AuthError> {
        Err(AuthError::Unsupported(
            "ClientLogin tokens cannot be revoked".to_string(),
        ))
    }

    fn token_info(&self, _transport: &dyn Transport) -> Result<TokenInfo, AuthError> {
        Err(AuthError::Unsupported(
            "ClientLogin tokens carry no token info".to_string(),
        ))
    }

    fn scheme(&self) -> &str {
        "ClientLogin"
    }
}
