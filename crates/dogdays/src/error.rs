//! Error types for dogdays operations.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::range::DateRange;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DogdaysError {
    /// A range was constructed with its begin after its end.
    #[error("Invalid range: begin {begin} is after end {end}")]
    InvalidRange {
        begin: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// A range was added to a list that already holds an intersecting range.
    /// Adjacent ranges (one ends exactly when the other begins) intersect.
    #[error("Attempt to add intersecting range to a DateRangeList: {range}")]
    DuplicateRange { range: DateRange },

    /// Day arithmetic ran past the dates chrono can represent.
    #[error("Date out of range: {0}")]
    DateOutOfRange(NaiveDate),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout dogdays.
pub type Result<T> = std::result::Result<T, DogdaysError>;
