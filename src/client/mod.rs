// Client module: the session object tying query, transport and decoding together
// Author: Gabriel Demetrios Lafis

mod results;

pub use results::*;

use log::{info, warn};

use crate::auth::{AuthError, AuthMethod, TokenInfo};
use crate::data::{decode_accounts, decode_report, AccountResult, ReportResult, Value};
use crate::query::{AccountQuery, ReportQuery, ReportQueryBuilder};
use crate::transport::{HttpRequest, HttpTransport, Transport};
use crate::utils::{AppError, AppResult, Config};

/// A session with the reporting service
///
/// Holds the result set of the last successful request. Every decode
/// replaces it in full.
pub struct AnalyticsClient {
    config: Config,
    auth: Box<dyn AuthMethod>,
    transport: Box<dyn Transport>,
    results: Option<ResultSet>,
}

impl AnalyticsClient {
    /// Create a new client over the given transport
    pub fn new<A, T>(config: Config, auth: A, transport: T) -> Self
    where
        A: AuthMethod + 'static,
        T: Transport + 'static,
    {
        AnalyticsClient {
            config,
            auth: Box::new(auth),
            transport: Box::new(transport),
            results: None,
        }
    }

    /// Create a client over HTTP and make sure it holds a token
    pub fn connect<A>(config: Config, auth: A) -> AppResult<Self>
    where
        A: AuthMethod + 'static,
    {
        let transport = HttpTransport::new(&config.http)?;
        let mut client = Self::new(config, auth, transport);
        client.authenticate()?;
        Ok(client)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Acquire a token unless one is already held
    pub fn authenticate(&mut self) -> AppResult<&str> {
        if self.auth.token().is_none() {
            info!("Acquiring {} token", self.auth.scheme());
            self.auth.fetch_token(self.transport.as_ref())?;
        }

        self.auth
            .token()
            .ok_or(AppError::Authentication(AuthError::NoToken))
    }

    /// Get the current token, e.g. to store it for a later session
    pub fn auth_token(&self) -> Option<&str> {
        self.auth.token()
    }

    /// Invalidate the current token at the service
    pub fn revoke_token(&mut self) -> AppResult<()> {
        self.auth.revoke_token(self.transport.as_ref())?;
        Ok(())
    }

    /// Ask the service what the current token grants
    pub fn token_info(&self) -> AppResult<TokenInfo> {
        Ok(self.auth.token_info(self.transport.as_ref())?)
    }

    /// Start a report query seeded with the configured defaults
    pub fn report_query(&self, report_id: &str) -> ReportQueryBuilder {
        ReportQuery::builder(report_id).max_results(self.config.defaults.max_results)
    }

    /// Request report data and keep it as the current result set
    pub fn request_report_data(&mut self, query: &ReportQuery) -> AppResult<&ReportResult> {
        let parameters = query.to_parameters(self.config.service.pretty_print);
        let request = HttpRequest::get(&self.config.service.report_data_url).with_query(parameters);

        let body = self.execute(request)?;

        self.results = None;
        let report = decode_report(&body)?;
        info!(
            "Report {} returned {} rows",
            query.report_id(),
            report.len()
        );
        self.results = Some(ResultSet::Report(report));

        self.report()
    }

    /// Request the account listing and keep it as the current result set
    pub fn request_account_data(&mut self, query: &AccountQuery) -> AppResult<&AccountResult> {
        let request = HttpRequest::get(&self.config.service.account_data_url)
            .with_query(query.to_parameters());

        let body = self.execute(request)?;

        self.results = None;
        let accounts = decode_accounts(&body)?;
        info!("Account listing returned {} entries", accounts.len());
        self.results = Some(ResultSet::Accounts(accounts));

        self.accounts()
    }

    /// Get the current result set, if any
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Get the current report result
    pub fn report(&self) -> AppResult<&ReportResult> {
        match &self.results {
            Some(ResultSet::Report(report)) => Ok(report),
            _ => Err(AppError::NoResults),
        }
    }

    /// Get the current account listing
    pub fn accounts(&self) -> AppResult<&AccountResult> {
        match &self.results {
            Some(ResultSet::Accounts(accounts)) => Ok(accounts),
            _ => Err(AppError::NoResults),
        }
    }

    /// Look up a field of the current result set by name, ignoring case
    pub fn get(&self, name: &str) -> AppResult<&Value> {
        let results = self.results.as_ref().ok_or(AppError::NoResults)?;
        Ok(results.get(name)?)
    }

    /// Send a request with the authorization header and return the body
    /// of a 2xx response
    fn execute(&mut self, request: HttpRequest) -> AppResult<String> {
        self.authenticate()?;

        let header = self.auth.header()?;
        let request = request.with_header(&header.name, &header.value);

        let response = self.transport.request(&request)?;
        if !response.is_success() {
            warn!("{} answered with status {}", request.url, response.status);
        }

        Ok(response.into_success()?)
    }
}
