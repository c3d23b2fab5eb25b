//! Convenience re-exports for common crudhaus usage
//!
//! This prelude module re-exports the most commonly used items,
//! including the capability traits needed to call the CRUD helpers.
//!
//! # Example
//!
//! ```rust
//! use crudhaus::prelude::*;
//!
//! // DataAccess, Crud, SoftDeletable, Transactional, params_from, ... are in scope
//! ```

// Core components
pub use crate::data_access::DataAccess;
pub use crate::errors::DataAccessError;
pub use crate::pagination::Pagination;
pub use crate::statement::{Fetched, Statement};

// Capability traits
pub use crate::traits::{Crud, SoftDeletable, Transactional};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Rows and parameters
pub use type_mapping::{ResultSet, Row, StatementParams, Value, params_from, serialize_to_params};

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
