//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{City, DomainError};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("malformed data in {path}: {source}")]
    Data {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("no data file for {city}: {path}")]
    DataFileNotFound { city: City, path: PathBuf },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("input closed")]
    InputClosed,

    #[error("operation failed: {context}: {source}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn given_operation_failure_when_displaying_then_includes_cause() {
        let err = ApplicationError::OperationFailed {
            context: "read answer".into(),
            source: Box::new(io::Error::new(io::ErrorKind::BrokenPipe, "stdin gone")),
        };
        assert_eq!(
            err.to_string(),
            "operation failed: read answer: stdin gone"
        );
    }
}
