//! Trait definitions
//!
//! This module defines the generic CRUD operations.

use crate::errors::DataAccessError;
use crate::statement::{Fetched, Statement};
use async_trait::async_trait;
use type_mapping::{ResultSet, StatementParams};

/// Generic create/read/update/delete over any table.
///
/// `table` and `condition` are raw SQL text supplied by a trusted caller;
/// they are never escaped or bound. An empty `condition` means no filter
/// where one is optional.
#[async_trait]
pub trait Crud: Send {
    /// Insert one row from `data`, each key a column bound as a named parameter
    async fn create(
        &mut self,
        table: &str,
        data: &StatementParams,
    ) -> Result<Statement, DataAccessError>;

    /// Select every column of the matching rows.
    /// `fetch = true` materializes the rows, otherwise the statement is returned.
    async fn read(
        &mut self,
        table: &str,
        condition: &str,
        fetch: bool,
    ) -> Result<Fetched, DataAccessError>;

    /// Update the matching rows, binding only the values in `data`
    async fn update(
        &mut self,
        table: &str,
        data: &StatementParams,
        condition: &str,
    ) -> Result<Statement, DataAccessError>;

    /// Physically delete the matching rows
    async fn delete(&mut self, table: &str, condition: &str)
        -> Result<Statement, DataAccessError>;

    /// Fetch one 1-based page of the matching rows
    async fn read_with_pagination(
        &mut self,
        table: &str,
        condition: &str,
        page: i64,
        per_page: i64,
    ) -> Result<ResultSet, DataAccessError>;

    /// Count the matching rows
    async fn count(&mut self, table: &str, condition: &str) -> Result<i64, DataAccessError>;
}
