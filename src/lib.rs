//! # crudhaus
//!
//! A thin MySQL data access layer: one connection, generic CRUD helpers,
//! soft deletion, pagination and transaction control.
//!
//! Table names and conditions are raw SQL text from a trusted caller and
//! are interpolated as-is. Only INSERT/UPDATE data values are bound as
//! parameters. Do not feed user input into `table` or `condition`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crudhaus::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut db = DataAccess::new("localhost", "root", "password", "app").await?;
//!
//!     let data = params_from([("name", json!("Ada")), ("email", json!("ada@example.com"))]);
//!     let inserted = db.create("users", &data).await?;
//!     println!("new id: {}", inserted.last_insert_id());
//!
//!     let users = db.read("users", "id > 0", true).await?.into_rows();
//!     println!("{} users", users.len());
//!
//!     db.begin_transaction().await?;
//!     db.update("users", &params_from([("name", json!("Ada L."))]), "id = 1").await?;
//!     db.commit().await?;
//!
//!     let page = db.read_with_pagination("users", "", 2, 10).await?;
//!     println!("page 2 holds {} users", page.len());
//!
//!     db.close().await?;
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod data_access;
pub mod errors;
pub mod pagination;
pub mod placeholders;
pub mod prelude;
pub mod sql;
pub mod statement;
pub mod traits;

// Re-export the main public types for convenience
pub use data_access::DataAccess;
pub use errors::DataAccessError;
pub use pagination::Pagination;
pub use statement::{Fetched, Statement};
pub use traits::{Crud, SoftDeletable, Transactional};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export internal crates used in the public API
pub use type_mapping;
pub use type_mapping::{ResultSet, Row, StatementParams, Value, params_from, serialize_to_params};

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
