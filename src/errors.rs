//! Error types for the crudhaus crate
//!
//! This module contains all error types that can be returned by `DataAccess` operations.

use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataAccessError {
    /// Opening the connection failed; no instance was created
    #[error("Database connection failed ({dsn}): {source}")]
    Connection {
        dsn: String,
        #[source]
        source: sqlx::Error,
    },

    /// Any failure while preparing, executing or fetching a statement
    #[error("Query execution failed: {message}")]
    QueryExecution {
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Transaction error: {0}")]
    TransactionState(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl DataAccessError {
    /// Wrap a driver error raised while running a statement
    pub fn query_execution(source: sqlx::Error) -> Self {
        Self::QueryExecution {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Execution failure detected before the statement reached the server
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::QueryExecution {
            message: message.into(),
            source: None,
        }
    }

    pub fn is_connection_closed(&self) -> bool {
        matches!(self, Self::ConnectionClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_execution_message() {
        let err = DataAccessError::invalid_query("missing value for named parameter :id");
        assert_eq!(
            err.to_string(),
            "Query execution failed: missing value for named parameter :id"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_driver_error_is_kept_as_source() {
        let err = DataAccessError::query_execution(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Query execution failed: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_connection_closed() {
        let err = DataAccessError::ConnectionClosed;
        assert!(err.is_connection_closed());
        assert_eq!(err.to_string(), "Connection closed");
    }
}
