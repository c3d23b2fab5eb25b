//! Soft-delete implementation
//!
//! Rows are hidden by stamping `deleted_at` instead of being removed.

use super::core::DataAccess;
use crate::errors::DataAccessError;
use crate::sql::SqlGenerator;
use crate::statement::{Fetched, Statement};
use crate::traits::SoftDeletable;
use async_trait::async_trait;
use type_mapping::StatementParams;

#[async_trait]
impl SoftDeletable for DataAccess {
    async fn soft_delete(
        &mut self,
        table: &str,
        condition: &str,
    ) -> Result<Statement, DataAccessError> {
        let sql = SqlGenerator::soft_delete(table, condition);
        self.execute_query(&sql, &StatementParams::new()).await
    }

    async fn read_with_soft_delete(
        &mut self,
        table: &str,
        condition: &str,
        fetch: bool,
    ) -> Result<Fetched, DataAccessError> {
        let sql = SqlGenerator::select_active(table, condition);
        let statement = self.execute_query(&sql, &StatementParams::new()).await?;
        Ok(Fetched::from_statement(statement, fetch))
    }

    async fn restore(
        &mut self,
        table: &str,
        condition: &str,
    ) -> Result<Statement, DataAccessError> {
        let sql = SqlGenerator::restore(table, condition);
        self.execute_query(&sql, &StatementParams::new()).await
    }
}
