//! Traits for database operations
//!
//! This module contains the capability traits implemented by
//! [`DataAccess`](crate::DataAccess): plain CRUD, soft deletion and
//! transaction control.

pub mod crud;
pub mod soft_deletable;
pub mod transactional;

// Re-export all public items for convenience
pub use crud::Crud;
pub use soft_deletable::SoftDeletable;
pub use transactional::Transactional;
