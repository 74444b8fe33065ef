// Rust Analytics Client
// Author: Gabriel Demetrios Lafis

//! # Rust Analytics Client
//!
//! A client for the analytics reporting service.
//!
//! ## Features
//!
//! - Report queries with namespaced dimensions, metrics and sort fields
//! - A compiler from readable filter expressions to the service's filter syntax
//! - Decoding of report and account feeds with per-value numeric inference
//! - Case-insensitive access to root metadata, aggregates and row fields
//! - ClientLogin and OAuth2 authentication with token reuse
//!
//! ## Example
//!
//! ```rust
//! use rust_analytics_client::{compile_filter, decode_report, ReportQuery};
//!
//! // Build a query
//! let query = ReportQuery::builder("12345")
//!     .dimensions(["browser", "browserVersion"])
//!     .metrics(["pageviews", "visits"])
//!     .sort(["-visits"])
//!     .filter("browser == Firefox && visits > 5")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(query.sort()[0].to_wire(), "-ga:visits");
//!
//! // Compile a filter on its own
//! let filter = compile_filter("source==direct && medium==referral").unwrap();
//! assert_eq!(filter.as_str(), "ga:source==direct;ga:medium==referral");
//!
//! // Decode a feed
//! let body = r#"<feed xmlns="http://www.w3.org/2005/Atom"
//!                    xmlns:dxp="http://schemas.google.com/analytics/2009">
//!     <dxp:aggregates><dxp:metric name="ga:pageviews" value="42"/></dxp:aggregates>
//! </feed>"#;
//! let report = decode_report(body).unwrap();
//! assert_eq!(report.get("PageViews").unwrap().as_i64(), Some(42));
//! ```

pub mod auth;
pub mod client;
pub mod data;
pub mod query;
pub mod transport;
pub mod utils;

// Re-export main types
pub use auth::{AuthMethod, ClientLogin, OAuth2, RefreshCredentials};
pub use client::{AnalyticsClient, ResultSet};
pub use data::{decode_accounts, decode_report, AccountResult, ReportResult, ResultRow, Value};
pub use query::{compile_filter, AccountQuery, CompiledFilter, ReportQuery};
pub use transport::{HttpTransport, Transport};
pub use utils::{AppError, AppResult, Config};
