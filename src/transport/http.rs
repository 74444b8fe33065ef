// Blocking HTTP transport
// Author: Gabriel Demetrios Lafis

use log::debug;
use reqwest::blocking::Client;

use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::utils::HttpConfig;

/// Transport over a blocking HTTP client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.full_url();
        debug!("{:?} {}", request.method(), request.url);

        let mut builder = match (&request.form, request.method()) {
            (Some(form), Method::Post) => self.client.post(&url).form(form),
            _ => self.client.get(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        debug!("{} answered {} ({} bytes)", request.url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
