// Result set held by a client session
// Author: Gabriel Demetrios Lafis

use crate::data::{AccountResult, DataError, ReportResult, Value};

/// The result set of the last decoded response
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    Report(ReportResult),
    Accounts(AccountResult),
}

impl ResultSet {
    /// Look up a result-level field by name, ignoring case
    ///
    /// Reports search root metadata, then aggregate metrics. Account
    /// listings search their root metadata.
    pub fn get(&self, name: &str) -> Result<&Value, DataError> {
        match self {
            ResultSet::Report(report) => report.get(name),
            ResultSet::Accounts(accounts) => accounts.get(name),
        }
    }

    /// Get the number of rows or entries
    pub fn len(&self) -> usize {
        match self {
            ResultSet::Report(report) => report.len(),
            ResultSet::Accounts(accounts) => accounts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
