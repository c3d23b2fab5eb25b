//! Type mapping definitions
//!
//! Dynamic row and parameter containers shared by the data access layer.

use indexmap::IndexMap;

/// Dynamically typed column or parameter value
pub use serde_json::Value;

/// One fetched record: column name to value, in result column order
pub type Row = IndexMap<String, Value>;

/// Ordered sequence of fetched records
pub type ResultSet = Vec<Row>;

/// Placeholder name to bound value. Keys may carry the leading `:` or not.
/// Insertion order is the column order for generated INSERT/UPDATE text.
pub type StatementParams = IndexMap<String, Value>;

/// Build parameters from any iterator of name/value pairs
///
/// ```
/// use type_mapping::params_from;
/// use serde_json::json;
///
/// let params = params_from([("name", json!("Ada")), ("age", json!(36))]);
/// assert_eq!(params.keys().collect::<Vec<_>>(), ["name", "age"]);
/// ```
pub fn params_from<I, K, V>(pairs: I) -> StatementParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_keep_insertion_order() {
        let params = params_from([
            ("zeta", json!(1)),
            ("alpha", json!("a")),
            ("mid", Value::Null),
        ]);
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_params_last_value_wins() {
        let params = params_from([("name", json!("first")), ("name", json!("second"))]);
        assert_eq!(params.len(), 1);
        assert_eq!(params["name"], json!("second"));
    }
}
