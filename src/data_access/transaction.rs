//! Transaction support for DataAccess
//!
//! Thin pass-throughs to the server's transaction statements. One level
//! only: there are no savepoints.

use super::core::DataAccess;
use crate::errors::DataAccessError;
use crate::traits::Transactional;
use async_trait::async_trait;
use sqlx::Executor;

#[async_trait]
impl Transactional for DataAccess {
    async fn begin_transaction(&mut self) -> Result<(), DataAccessError> {
        let active = self.in_transaction;
        let conn = self.connection()?;
        if active {
            return Err(DataAccessError::TransactionState(
                "There is already an active transaction".to_string(),
            ));
        }

        conn.execute("START TRANSACTION")
            .await
            .map_err(DataAccessError::query_execution)?;
        self.in_transaction = true;
        debug_log!("[TRANSACTION] begin on {}", self.dsn);
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DataAccessError> {
        let active = self.in_transaction;
        let conn = self.connection()?;
        if !active {
            return Err(DataAccessError::TransactionState(
                "There is no active transaction".to_string(),
            ));
        }

        conn.execute("COMMIT")
            .await
            .map_err(DataAccessError::query_execution)?;
        self.in_transaction = false;
        debug_log!("[TRANSACTION] commit on {}", self.dsn);
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DataAccessError> {
        let active = self.in_transaction;
        let conn = self.connection()?;
        if !active {
            return Err(DataAccessError::TransactionState(
                "There is no active transaction".to_string(),
            ));
        }

        conn.execute("ROLLBACK")
            .await
            .map_err(DataAccessError::query_execution)?;
        self.in_transaction = false;
        debug_log!("[TRANSACTION] rollback on {}", self.dsn);
        Ok(())
    }

    fn in_transaction(&self) -> bool {
        self.in_transaction
    }
}
