//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed trip data.
/// Any of these aborts the load of a dataset; rows are never skipped.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("row {row}: invalid start time {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: invalid trip duration {value}")]
    InvalidDuration { row: usize, value: f64 },

    #[error("header: {0}")]
    InvalidHeader(String),

    #[error("row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}
