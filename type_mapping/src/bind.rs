//! Parameter binding
//!
//! Binds dynamic values onto a prepared MySQL query.

use crate::types::Value;
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;

/// Bind one dynamic value as the next positional argument.
///
/// Integers bind as `BIGINT` (or `BIGINT UNSIGNED` above `i64::MAX`),
/// arrays and objects as JSON text.
pub fn bind_value<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: Value,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        Value::String(s) => query.bind(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(u) = n.as_u64() {
                query.bind(u)
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        Value::Bool(b) => query.bind(b),
        Value::Null => query.bind(Option::<String>::None),
        other => query.bind(sqlx::types::Json(other)),
    }
}
