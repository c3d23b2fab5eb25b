//! Trait definitions
//!
//! This module defines transaction control.

use crate::errors::DataAccessError;
use async_trait::async_trait;

/// Connection-scoped, non-nesting transactions
#[async_trait]
pub trait Transactional: Send {
    /// Start a transaction. Fails if one is already active.
    async fn begin_transaction(&mut self) -> Result<(), DataAccessError>;

    /// Commit the active transaction. Fails if none is active.
    async fn commit(&mut self) -> Result<(), DataAccessError>;

    /// Roll back the active transaction. Fails if none is active.
    async fn rollback(&mut self) -> Result<(), DataAccessError>;

    fn in_transaction(&self) -> bool;
}
