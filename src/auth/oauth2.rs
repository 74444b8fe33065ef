// OAuth2 bearer token authentication
// Author: Gabriel Demetrios Lafis

use log::info;
use serde::Deserialize;

use super::{AuthError, AuthHeader, AuthMethod, TokenInfo};
use crate::transport::{strip_tags, HttpRequest, Transport};
use crate::utils::ServiceConfig;

/// Credentials for the refresh-token grant
#[derive(Debug, Clone)]
pub struct RefreshCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Authenticates with an OAuth2 access token
pub struct OAuth2 {
    access_token: Option<String>,
    refresh: Option<RefreshCredentials>,
    token_url: String,
    revoke_url: String,
    token_info_url: String,
}

impl OAuth2 {
    fn from_config(config: &ServiceConfig) -> Self {
        OAuth2 {
            access_token: None,
            refresh: None,
            token_url: config.oauth2_token_url.clone(),
            revoke_url: config.oauth2_revoke_url.clone(),
            token_info_url: config.oauth2_token_info_url.clone(),
        }
    }

    /// Use an access token that was issued elsewhere
    pub fn with_access_token(token: &str, config: &ServiceConfig) -> Self {
        let mut auth = Self::from_config(config);
        auth.access_token = Some(token.to_string());
        auth
    }

    /// Acquire access tokens through the refresh-token grant
    pub fn with_refresh_token(credentials: RefreshCredentials, config: &ServiceConfig) -> Self {
        let mut auth = Self::from_config(config);
        auth.refresh = Some(credentials);
        auth
    }

    fn current_token(&self) -> Result<&str, AuthError> {
        self.access_token.as_deref().ok_or(AuthError::NoToken)
    }
}

impl AuthMethod for OAuth2 {
    fn fetch_token(&mut self, transport: &dyn Transport) -> Result<String, AuthError> {
        let credentials = self.refresh.as_ref().ok_or_else(|| {
            AuthError::Unsupported("no refresh credentials to acquire a token with".to_string())
        })?;

        info!("Refreshing access token for client {}", credentials.client_id);

        let form = vec![
            ("client_id".to_string(), credentials.client_id.clone()),
            ("client_secret".to_string(), credentials.client_secret.clone()),
            ("refresh_token".to_string(), credentials.refresh_token.clone()),
            ("grant_type".to_string(), "refresh_token".to_string()),
        ];
        let body = transport
            .request(&HttpRequest::post(&self.token_url, form))?
            .into_success()?;

        let response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        let token = response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::MissingCredential {
                field: "access_token".to_string(),
                body: strip_tags(&body),
            })?;

        self.access_token = Some(token.clone());
        Ok(token)
    }

    fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn header(&self) -> Result<AuthHeader, AuthError> {
        Ok(AuthHeader::authorization(format!("Bearer {}", self.current_token()?)))
    }

    fn revoke_token(&mut self, transport: &dyn Transport) -> Result<(), AuthError> {
        let token = urlencoding::encode(self.current_token()?).into_owned();
        let request =
            HttpRequest::get(&self.revoke_url).with_query(vec![("token".to_string(), token)]);

        transport.request(&request)?.into_success()?;

        info!("Access token revoked");
        self.access_token = None;
        Ok(())
    }

    fn token_info(&self, transport: &dyn Transport) -> Result<TokenInfo, AuthError> {
        let token = urlencoding::encode(self.current_token()?).into_owned();
        let request = HttpRequest::get(&self.token_info_url)
            .with_query(vec![("access_token".to_string(), token)]);

        let body = transport.request(&request)?.into_success()?;

        serde_json::from_str(&body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    fn scheme(&self) -> &str {
        "OAuth2"
    }
}
