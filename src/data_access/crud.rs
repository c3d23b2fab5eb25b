//! Generic CRUD implementation
//!
//! Each helper builds its statement text and hands it to `execute_query`.

use super::core::DataAccess;
use crate::errors::DataAccessError;
use crate::pagination::Pagination;
use crate::sql::SqlGenerator;
use crate::statement::{Fetched, Statement};
use crate::traits::Crud;
use async_trait::async_trait;
use type_mapping::{ResultSet, StatementParams, Value, is_placeholder_name, params_from};

#[async_trait]
impl Crud for DataAccess {
    async fn create(
        &mut self,
        table: &str,
        data: &StatementParams,
    ) -> Result<Statement, DataAccessError> {
        self.connection()?;
        if data.is_empty() {
            return Err(DataAccessError::invalid_query(format!(
                "no columns given for insert into {}",
                table
            )));
        }
        check_columns(table, data)?;

        let sql = SqlGenerator::insert(table, data);
        self.execute_query(&sql, data).await
    }

    async fn read(
        &mut self,
        table: &str,
        condition: &str,
        fetch: bool,
    ) -> Result<Fetched, DataAccessError> {
        let sql = SqlGenerator::select(table, condition);
        let statement = self.execute_query(&sql, &StatementParams::new()).await?;
        Ok(Fetched::from_statement(statement, fetch))
    }

    async fn update(
        &mut self,
        table: &str,
        data: &StatementParams,
        condition: &str,
    ) -> Result<Statement, DataAccessError> {
        self.connection()?;
        check_columns(table, data)?;

        let sql = SqlGenerator::update(table, data, condition);
        self.execute_query(&sql, data).await
    }

    async fn delete(
        &mut self,
        table: &str,
        condition: &str,
    ) -> Result<Statement, DataAccessError> {
        let sql = SqlGenerator::delete(table, condition);
        // `condition` matches no placeholder in the DELETE text and stays unbound
        let params = params_from([("condition", Value::from(condition))]);
        self.execute_query(&sql, &params).await
    }

    async fn read_with_pagination(
        &mut self,
        table: &str,
        condition: &str,
        page: i64,
        per_page: i64,
    ) -> Result<ResultSet, DataAccessError> {
        let sql = SqlGenerator::select_page(table, condition, &Pagination::new(page, per_page));
        let mut statement = self.execute_query(&sql, &StatementParams::new()).await?;
        Ok(statement.fetch_all())
    }

    async fn count(&mut self, table: &str, condition: &str) -> Result<i64, DataAccessError> {
        let sql = SqlGenerator::count(table, condition);
        let mut statement = self.execute_query(&sql, &StatementParams::new()).await?;
        statement
            .fetch()
            .and_then(|row| row.get("total").and_then(Value::as_i64))
            .ok_or_else(|| {
                DataAccessError::invalid_query(format!("COUNT(*) on {} returned no total", table))
            })
    }
}

/// Data keys double as column names and placeholder names, so each must be
/// a plain identifier
fn check_columns(table: &str, data: &StatementParams) -> Result<(), DataAccessError> {
    match data
        .keys()
        .map(|key| key.strip_prefix(':').unwrap_or(key))
        .find(|key| !is_placeholder_name(key))
    {
        Some(bad) => Err(DataAccessError::invalid_query(format!(
            "invalid column name '{}' for {}",
            bad, table
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_column_names_pass() {
        let data = params_from([("name", json!("A")), (":user_id", json!(7))]);
        assert!(check_columns("users", &data).is_ok());
        assert!(check_columns("users", &StatementParams::new()).is_ok());
    }

    #[test]
    fn test_unusable_column_names_are_rejected() {
        for key in ["first name", "a-b", "", "name; DROP TABLE users"] {
            let data = params_from([("id", json!(1)), (key, json!("x"))]);
            let err = check_columns("users", &data).unwrap_err();
            assert!(matches!(err, DataAccessError::QueryExecution { .. }));
            assert!(err.to_string().contains("invalid column name"), "{}", err);
        }
    }
}
