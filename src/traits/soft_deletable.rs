//! Trait definitions
//!
//! This module defines soft-deletion operations.

use crate::errors::DataAccessError;
use crate::statement::{Fetched, Statement};
use async_trait::async_trait;

/// Tables carrying a nullable `deleted_at` timestamp column
#[async_trait]
pub trait SoftDeletable: Send {
    /// Stamp `deleted_at = NOW()` on the matching rows
    async fn soft_delete(
        &mut self,
        table: &str,
        condition: &str,
    ) -> Result<Statement, DataAccessError>;

    /// Like `read`, restricted to rows whose `deleted_at` is NULL
    async fn read_with_soft_delete(
        &mut self,
        table: &str,
        condition: &str,
        fetch: bool,
    ) -> Result<Fetched, DataAccessError>;

    /// Clear `deleted_at` on the matching rows
    async fn restore(&mut self, table: &str, condition: &str)
        -> Result<Statement, DataAccessError>;
}
