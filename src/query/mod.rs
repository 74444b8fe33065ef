// Query module for building report and account requests
// Author: Gabriel Demetrios Lafis

mod builder;
mod dates;
mod filter;

pub use builder::*;
pub use dates::*;
pub use filter::*;

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::validate_positive;

/// Prefix the wire format requires on every field name
pub const NAMESPACE_TOKEN: &str = "ga:";

/// Default number of rows requested per page
pub const DEFAULT_MAX_RESULTS: u32 = 30;

/// Ordered request parameters as sent on the wire
pub type Parameters = Vec<(String, String)>;

/// Prefix a field name with the namespace token
pub fn namespaced(name: &str) -> String {
    format!("{}{}", NAMESPACE_TOKEN, name)
}

/// Join field names into a comma-separated, namespaced list
pub fn namespaced_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| namespaced(name))
        .collect::<Vec<_>>()
        .join(",")
}

/// Represents a sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A field to sort by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

impl SortField {
    pub fn ascending(field: &str) -> Self {
        SortField {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: &str) -> Self {
        SortField {
            field: field.to_string(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse a sort spelling; a leading `-` means descending
    pub fn parse(spelling: &str) -> Self {
        match spelling.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(spelling),
        }
    }

    /// Wire form of the field (`ga:visits` or `-ga:visits`)
    pub fn to_wire(&self) -> String {
        match self.direction {
            SortDirection::Ascending => namespaced(&self.field),
            SortDirection::Descending => format!("-{}", namespaced(&self.field)),
        }
    }
}

impl From<&str> for SortField {
    fn from(spelling: &str) -> Self {
        SortField::parse(spelling)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

/// A fully built report request; immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct ReportQuery {
    pub(crate) report_id: String,
    pub(crate) dimensions: Vec<String>,
    pub(crate) metrics: Vec<String>,
    pub(crate) sort: Vec<SortField>,
    pub(crate) filter: Option<CompiledFilter>,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) start_index: u32,
    pub(crate) max_results: u32,
}

impl ReportQuery {
    /// Start building a report request for a profile
    pub fn builder(report_id: &str) -> ReportQueryBuilder {
        ReportQueryBuilder::new(report_id)
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn sort(&self) -> &[SortField] {
        &self.sort
    }

    pub fn filter(&self) -> Option<&CompiledFilter> {
        self.filter.as_ref()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Translate the query into the service's wire parameters
    ///
    /// The `dimensions` and `filters` parameters are left out when there is
    /// nothing to send.
    pub fn to_parameters(&self, pretty_print: bool) -> Parameters {
        let mut parameters = Parameters::new();

        parameters.push(("ids".to_string(), namespaced(&self.report_id)));

        if !self.dimensions.is_empty() {
            parameters.push(("dimensions".to_string(), namespaced_list(&self.dimensions)));
        }

        parameters.push(("metrics".to_string(), namespaced_list(&self.metrics)));

        let sort: Vec<String> = self.sort.iter().map(SortField::to_wire).collect();
        parameters.push(("sort".to_string(), sort.join(",")));

        if let Some(filter) = &self.filter {
            parameters.push(("filters".to_string(), filter.encoded()));
        }

        parameters.push(("start-date".to_string(), format_date(self.start_date)));
        parameters.push(("end-date".to_string(), format_date(self.end_date)));
        parameters.push(("start-index".to_string(), self.start_index.to_string()));
        parameters.push(("max-results".to_string(), self.max_results.to_string()));
        parameters.push(("prettyprint".to_string(), pretty_print.to_string()));

        parameters
    }
}

/// Pagination for an account listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountQuery {
    start_index: u32,
    max_results: u32,
}

impl AccountQuery {
    /// Create a new account query
    pub fn new(start_index: u32, max_results: u32) -> Result<Self, QueryError> {
        validate_positive(start_index, "start-index").map_err(QueryError::Validation)?;
        validate_positive(max_results, "max-results").map_err(QueryError::Validation)?;

        Ok(AccountQuery {
            start_index,
            max_results,
        })
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn to_parameters(&self) -> Parameters {
        vec![
            ("start-index".to_string(), self.start_index.to_string()),
            ("max-results".to_string(), self.max_results.to_string()),
        ]
    }
}

impl Default for AccountQuery {
    fn default() -> Self {
        AccountQuery {
            start_index: 1,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Represents an error in the query module
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
