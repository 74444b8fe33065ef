// Report query builder
// Author: Gabriel Demetrios Lafis

use chrono::NaiveDate;
use log::debug;

use super::{
    compile_filter, one_month_before, today, QueryError, ReportQuery, SortField,
    DEFAULT_MAX_RESULTS,
};
use crate::utils::{validate_date_order, validate_not_empty, validate_positive};

/// Builder for report queries
#[derive(Debug, Clone)]
pub struct ReportQueryBuilder {
    report_id: String,
    dimensions: Vec<String>,
    metrics: Vec<String>,
    sort: Option<Vec<SortField>>,
    filter: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_index: u32,
    max_results: u32,
}

impl ReportQueryBuilder {
    /// Create a new builder for a profile
    pub fn new(report_id: &str) -> Self {
        ReportQueryBuilder {
            report_id: report_id.to_string(),
            dimensions: Vec::new(),
            metrics: Vec::new(),
            sort: None,
            filter: None,
            start_date: None,
            end_date: None,
            start_index: 1,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the dimensions, in the order they should be reported
    pub fn dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single dimension
    pub fn dimension(mut self, dimension: &str) -> Self {
        self.dimensions.push(dimension.to_string());
        self
    }

    /// Set the metrics, in the order they should be reported
    pub fn metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single metric
    pub fn metric(mut self, metric: &str) -> Self {
        self.metrics.push(metric.to_string());
        self
    }

    /// Set the sort order; prefix a field with `-` to sort descending
    ///
    /// Without an explicit sort the report is sorted by its metrics, ascending.
    pub fn sort<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sort = Some(
            fields
                .into_iter()
                .map(|field| SortField::parse(field.as_ref()))
                .collect(),
        );
        self
    }

    /// Set a filter expression such as `browser == Firefox && visits > 5`
    pub fn filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set both ends of the date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    /// Set the 1-based index of the first row
    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    /// Set the maximum number of rows
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Build the query, defaulting the date range relative to today
    pub fn build(self) -> Result<ReportQuery, QueryError> {
        self.build_on(today())
    }

    /// Build the query, defaulting the date range relative to `today`
    ///
    /// The start date defaults to one month before `today` and the end
    /// date to `today` itself.
    pub fn build_on(self, today: NaiveDate) -> Result<ReportQuery, QueryError> {
        validate_not_empty(&self.metrics, "metrics").map_err(QueryError::Validation)?;
        validate_positive(self.start_index, "start-index").map_err(QueryError::Validation)?;
        validate_positive(self.max_results, "max-results").map_err(QueryError::Validation)?;

        let start_date = self.start_date.unwrap_or_else(|| one_month_before(today));
        let end_date = self.end_date.unwrap_or(today);
        validate_date_order(start_date, end_date).map_err(QueryError::Validation)?;

        let sort = match self.sort {
            Some(sort) => sort,
            None => self
                .metrics
                .iter()
                .map(|metric| SortField::ascending(metric))
                .collect(),
        };

        let filter = self.filter.as_deref().and_then(compile_filter);

        debug!(
            "Built report query for {}: {} dimensions, {} metrics, filter {:?}",
            self.report_id,
            self.dimensions.len(),
            self.metrics.len(),
            filter.as_ref().map(|f| f.as_str())
        );

        Ok(ReportQuery {
            report_id: self.report_id,
            dimensions: self.dimensions,
            metrics: self.metrics,
            sort,
            filter,
            start_date,
            end_date,
            start_index: self.start_index,
            max_results: self.max_results,
        })
    }
}
