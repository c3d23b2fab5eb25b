//! Core DataAccess functionality
//!
//! Connection lifecycle and the shared execute primitive every CRUD helper
//! delegates to.

use crate::errors::DataAccessError;
use crate::placeholders::{self, CompiledQuery};
use crate::statement::Statement;
use config::{DEFAULT_PORT, DatabaseConfig};
use futures::TryStreamExt;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Either, Executor};
use std::collections::VecDeque;
use type_mapping::{StatementParams, bind_value, decode_row};

/// One live MySQL connection with CRUD helpers.
///
/// All operations take `&mut self` and complete one round trip before
/// returning. Share an instance across tasks only behind external
/// synchronization; prefer one instance per worker.
pub struct DataAccess {
    pub(crate) conn: Option<MySqlConnection>,
    pub(crate) dsn: String,
    pub(crate) in_transaction: bool,
}

impl std::fmt::Debug for DataAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataAccess")
            .field("dsn", &self.dsn)
            .field("closed", &self.is_closed())
            .field("in_transaction", &self.in_transaction)
            .finish()
    }
}

impl DataAccess {
    /// Connect on the default port. Never returns a half-open instance.
    pub async fn new(
        host: &str,
        username: &str,
        password: &str,
        database: &str,
    ) -> Result<Self, DataAccessError> {
        let config = DatabaseConfig::new(
            host.to_string(),
            DEFAULT_PORT,
            database.to_string(),
            username.to_string(),
            password.to_string(),
        );
        Self::connect(&config).await
    }

    /// Connect with a full configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DataAccessError> {
        config.validate()?;
        let dsn = config.dsn();

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database);

        let conn = MySqlConnection::connect_with(&options)
            .await
            .map_err(|source| DataAccessError::Connection {
                dsn: dsn.clone(),
                source,
            })?;

        tracing::debug!("connected to {}", dsn);

        Ok(Self {
            conn: Some(conn),
            dsn,
            in_transaction: false,
        })
    }

    /// Data source name this instance was opened with
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    pub(crate) fn connection(&mut self) -> Result<&mut MySqlConnection, DataAccessError> {
        self.conn.as_mut().ok_or(DataAccessError::ConnectionClosed)
    }

    /// Prepare `query`, bind `params` by placeholder name, execute it and
    /// buffer the outcome.
    ///
    /// Every failure, whether driver error, missing parameter value or
    /// undecodable column, surfaces as [`DataAccessError::QueryExecution`].
    pub async fn execute_query(
        &mut self,
        query: &str,
        params: &StatementParams,
    ) -> Result<Statement, DataAccessError> {
        let conn = self.connection()?;
        let CompiledQuery { sql, bindings } = placeholders::compile(query, params)?;

        debug_log!("[EXECUTE] SQL: {}", sql);
        debug_log!("[EXECUTE] bound values: {}", bindings.len());

        let mut sqlx_query = sqlx::query(&sql);
        for value in bindings {
            sqlx_query = bind_value(sqlx_query, value);
        }

        let mut rows = VecDeque::new();
        let mut rows_affected = 0;
        let mut last_insert_id = 0;
        let mut has_result_set = false;

        let mut results = conn.fetch_many(sqlx_query);
        while let Some(result) = results
            .try_next()
            .await
            .map_err(DataAccessError::query_execution)?
        {
            match result {
                Either::Left(done) => {
                    rows_affected += done.rows_affected();
                    if done.last_insert_id() != 0 {
                        last_insert_id = done.last_insert_id();
                    }
                }
                Either::Right(row) => {
                    has_result_set = true;
                    rows.push_back(decode_row(&row).map_err(DataAccessError::query_execution)?);
                }
            }
        }

        trace_log!(
            "[EXECUTE] rows: {}, affected: {}, last insert id: {}",
            rows.len(),
            rows_affected,
            last_insert_id
        );

        Ok(Statement::new(
            query.to_string(),
            rows,
            rows_affected,
            last_insert_id,
            has_result_set,
        ))
    }

    /// Check that the server still answers
    pub async fn ping(&mut self) -> Result<(), DataAccessError> {
        self.connection()?
            .ping()
            .await
            .map_err(DataAccessError::query_execution)
    }

    /// Release the connection. Closing twice is a no-op; anything else
    /// afterwards fails with [`DataAccessError::ConnectionClosed`].
    pub async fn close(&mut self) -> Result<(), DataAccessError> {
        if let Some(conn) = self.conn.take() {
            self.in_transaction = false;
            conn.close()
                .await
                .map_err(DataAccessError::query_execution)?;
            tracing::debug!("closed connection to {}", self.dsn);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn closed(dsn: &str) -> Self {
        Self {
            conn: None,
            dsn: dsn.to_string(),
            in_transaction: false,
        }
    }
}
