// Report feed decoding and result access
// Author: Gabriel Demetrios Lafis

use std::fmt;

use log::debug;
use roxmltree::Node;

use super::feed::{
    attribute, child, children, feed_root_metadata, parse_document, text,
    ATOM_NAMESPACE, SERVICE_NAMESPACE,
};
use super::{infer_numeric, strip_namespace, DataError, FeedDecoder, FieldMap, Value};

/// One row of a report: metrics and dimensions keyed by field name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    metrics: FieldMap<Value>,
    dimensions: FieldMap<String>,
}

impl ResultRow {
    /// Create a new row
    pub fn new(metrics: FieldMap<Value>, dimensions: FieldMap<String>) -> Self {
        ResultRow {
            metrics,
            dimensions,
        }
    }

    /// Get all metrics of the row
    pub fn metrics(&self) -> &FieldMap<Value> {
        &self.metrics
    }

    /// Get all dimensions of the row
    pub fn dimensions(&self) -> &FieldMap<String> {
        &self.dimensions
    }

    /// Get a metric by name, ignoring case
    pub fn metric(&self, name: &str) -> Result<&Value, DataError> {
        self.metrics
            .get(name)
            .ok_or_else(|| DataError::FieldNotFound(name.to_string()))
    }

    /// Get a dimension by name, ignoring case
    pub fn dimension(&self, name: &str) -> Result<&str, DataError> {
        self.dimensions
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| DataError::FieldNotFound(name.to_string()))
    }

    /// Look up a field by name: metrics first, then dimensions
    pub fn get(&self, name: &str) -> Result<Value, DataError> {
        if let Some(value) = self.metrics.get(name) {
            return Ok(value.clone());
        }

        self.dimensions
            .get(name)
            .map(|value| Value::String(value.clone()))
            .ok_or_else(|| DataError::FieldNotFound(name.to_string()))
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let values: Vec<&str> = self.dimensions.values().map(String::as_str).collect();
        write!(f, "{}", values.join(" "))
    }
}

/// A decoded report: root metadata, aggregate metrics and rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportResult {
    root: FieldMap<Value>,
    aggregates: FieldMap<Value>,
    rows: Vec<ResultRow>,
}

impl ReportResult {
    /// Create a new report result
    pub fn new(root: FieldMap<Value>, aggregates: FieldMap<Value>, rows: Vec<ResultRow>) -> Self {
        ReportResult {
            root,
            aggregates,
            rows,
        }
    }

    /// Get the root metadata
    pub fn root_parameters(&self) -> &FieldMap<Value> {
        &self.root
    }

    /// Get the aggregate metrics
    pub fn metrics(&self) -> &FieldMap<Value> {
        &self.aggregates
    }

    /// Get the rows in document order
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the report has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a report-level field: root metadata first, then aggregates
    pub fn get(&self, name: &str) -> Result<&Value, DataError> {
        self.root
            .get(name)
            .or_else(|| self.aggregates.get(name))
            .ok_or_else(|| DataError::FieldNotFound(name.to_string()))
    }

    pub fn total_results(&self) -> Option<i64> {
        self.root.get("totalResults").and_then(Value::as_i64)
    }

    pub fn start_date(&self) -> Option<&str> {
        self.root.get("startDate").and_then(Value::as_str)
    }

    pub fn end_date(&self) -> Option<&str> {
        self.root.get("endDate").and_then(Value::as_str)
    }
}

/// Decoder for report data feeds
pub struct ReportDecoder;

impl ReportDecoder {
    /// Collect `name -> inferred number` from every service `metric` child
    fn metrics_of(node: Node) -> FieldMap<Value> {
        children(node, SERVICE_NAMESPACE, "metric")
            .map(|metric| {
                (
                    strip_namespace(attribute(metric, "name")).to_string(),
                    infer_numeric(attribute(metric, "value")),
                )
            })
            .collect()
    }

    fn decode_root(feed: Node) -> FieldMap<Value> {
        let mut root = feed_root_metadata(feed);

        if let Some(data_source) = child(feed, SERVICE_NAMESPACE, "dataSource") {
            for property in children(data_source, SERVICE_NAMESPACE, "property") {
                root.insert(
                    strip_namespace(attribute(property, "name")),
                    Value::String(attribute(property, "value").to_string()),
                );
            }

            if let Some(table_id) = child(data_source, SERVICE_NAMESPACE, "tableId") {
                root.insert("tableId", Value::String(text(table_id)));
            }
            if let Some(table_name) = child(data_source, SERVICE_NAMESPACE, "tableName") {
                root.insert("tableName", Value::String(text(table_name)));
            }
        }

        for name in ["startDate", "endDate"] {
            if let Some(date) = child(feed, SERVICE_NAMESPACE, name) {
                root.insert(name, Value::String(text(date)));
            }
        }

        root
    }

    fn decode_row(entry: Node) -> ResultRow {
        let dimensions = children(entry, SERVICE_NAMESPACE, "dimension")
            .map(|dimension| {
                (
                    strip_namespace(attribute(dimension, "name")).to_string(),
                    attribute(dimension, "value").to_string(),
                )
            })
            .collect();

        ResultRow::new(Self::metrics_of(entry), dimensions)
    }
}

impl FeedDecoder for ReportDecoder {
    type Output = ReportResult;

    fn decode(&self, body: &str) -> Result<ReportResult, DataError> {
        let document = parse_document(body)?;
        let feed = document.root_element();

        let root = Self::decode_root(feed);

        let aggregates = child(feed, SERVICE_NAMESPACE, "aggregates")
            .map(Self::metrics_of)
            .unwrap_or_default();

        let rows: Vec<ResultRow> = children(feed, ATOM_NAMESPACE, "entry")
            .map(Self::decode_row)
            .collect();

        debug!(
            "Decoded report: {} root parameters, {} aggregate metrics, {} rows",
            root.len(),
            aggregates.len(),
            rows.len()
        );

        Ok(ReportResult::new(root, aggregates, rows))
    }

    fn name(&self) -> &str {
        "report"
    }
}

/// Decode a report data feed
pub fn decode_report(body: &str) -> Result<ReportResult, DataError> {
    ReportDecoder.decode(body)
}
