// Validation utilities
// Author: Gabriel Demetrios Lafis

use std::fmt::Display;

use chrono::NaiveDate;

/// Validate that a list has at least one element
pub fn validate_not_empty<T>(values: &[T], name: &str) -> Result<(), String> {
    if values.is_empty() {
        Err(format!("'{}' cannot be empty", name))
    } else {
        Ok(())
    }
}

/// Validate that a numeric value is positive
pub fn validate_positive<T>(value: T, name: &str) -> Result<(), String>
where
    T: PartialOrd + Default + Display,
{
    if value <= T::default() {
        Err(format!("'{}' must be positive, got {}", name, value))
    } else {
        Ok(())
    }
}

/// Validate that a date range does not end before it starts
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), String> {
    if start > end {
        Err(format!(
            "start date {} is after end date {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ))
    } else {
        Ok(())
    }
}
