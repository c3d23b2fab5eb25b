//! Unified type mapping between dynamic values and MySQL
//! This crate provides the row, parameter and value conversions used across crudhaus

pub mod bind;
pub mod decode;
pub mod serialize;
pub mod sql;
pub mod types;
pub mod validate;

pub use bind::bind_value;
pub use decode::{decode_column, decode_row};
pub use serialize::serialize_to_params;
pub use sql::ValueKind;
pub use types::{params_from, ResultSet, Row, StatementParams, Value};
pub use validate::{is_placeholder_char, is_placeholder_name};
