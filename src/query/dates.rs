// Date range helpers for report queries
// Author: Gabriel Demetrios Lafis

use chrono::{Local, Months, NaiveDate};

use super::QueryError;

/// Wire format of report dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// One calendar month before `today`
///
/// Days past the end of the shorter month are clamped, so March 31st maps
/// to the last day of February.
pub fn one_month_before(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(1)).unwrap_or(today)
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| QueryError::InvalidDate(date.to_string()))
}
