// Transport module for issuing requests to the service
// Author: Gabriel Demetrios Lafis

mod http;
mod markup;

pub use http::*;
pub use markup::*;

use thiserror::Error;

use crate::query::Parameters;

/// Executes HTTP requests and returns the raw status and body
pub trait Transport {
    /// Execute a request; GET when it carries no form body, POST otherwise
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request to send through a [`Transport`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpRequest {
    pub url: String,
    pub query: Parameters,
    pub form: Option<Parameters>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create a GET request
    pub fn get(url: &str) -> Self {
        HttpRequest {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Create a POST request with a form body
    pub fn post(url: &str, form: Parameters) -> Self {
        HttpRequest {
            url: url.to_string(),
            form: Some(form),
            ..Default::default()
        }
    }

    /// Set the query parameters
    pub fn with_query(mut self, query: Parameters) -> Self {
        self.query = query;
        self
    }

    /// Add a header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> Method {
        if self.form.is_some() {
            Method::Post
        } else {
            Method::Get
        }
    }

    /// Get a query parameter by name
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The URL with query parameters appended
    ///
    /// Values are appended as given: they are expected to be wire-ready,
    /// and the compiled filter is already percent-encoded.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let query: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query.join("&"))
    }
}

/// Raw response from a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Create a new response
    pub fn new(status: u16, body: &str) -> Self {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    /// Check whether the status code is in the 2xx class
    pub fn is_success(&self) -> bool {
        self.status / 100 == 2
    }

    /// Get the body of a 2xx response, or a status error carrying the
    /// markup-stripped body
    pub fn into_success(self) -> Result<String, TransportError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(TransportError::Status {
                status: self.status,
                body: strip_tags(&self.body),
            })
        }
    }
}

/// Represents an error in the transport module
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {status}: \"{body}\"")]
    Status { status: u16, body: String },
    #[error("Request failed: {0}")]
    Request(String),
}
