//! Serialization utilities
//!
//! Converts typed records into statement parameters so callers can pass a
//! struct where a column/value mapping is expected.

use crate::types::StatementParams;
use serde::Serialize;

/// Convert a serializable record into parameters, one entry per field in
/// declaration order. Fails when `data` does not serialize, or does not
/// serialize to a JSON object.
pub fn serialize_to_params<T: Serialize>(data: &T) -> Result<StatementParams, serde_json::Error> {
    // Go through JSON text: serde_json::Value sorts object keys, the text keeps field order
    let text = serde_json::to_string(data)?;
    serde_json::from_str::<StatementParams>(&text)
}
