pub mod core;
pub mod crud;
pub mod soft_deletable;
pub mod transaction;

pub use self::core::DataAccess;
