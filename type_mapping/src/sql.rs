//! SQL type conversion utilities
//!
//! This module maps MySQL column type names, as reported by the driver,
//! onto the dynamic value shape a column decodes into.

/// How a result column is decoded into a dynamic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Signed,
    Unsigned,
    Float,
    /// Exact numerics, rendered as strings to keep precision
    Decimal,
    Date,
    DateTime,
    Time,
    Json,
    Text,
    /// Binary or otherwise opaque payloads
    Bytes,
}

impl ValueKind {
    /// Map a driver type name (e.g. `INT UNSIGNED`, `VARCHAR`, `DATETIME`) to a value kind
    pub fn from_type_name(type_name: &str) -> Self {
        // Normalize so "int  unsigned" and "INT UNSIGNED" match alike
        let normalized = type_name
            .split_whitespace()
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "NULL" => ValueKind::Null,
            "BOOLEAN" | "BOOL" => ValueKind::Bool,
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" | "BIGINT" => {
                ValueKind::Signed
            }
            "TINYINT UNSIGNED"
            | "SMALLINT UNSIGNED"
            | "MEDIUMINT UNSIGNED"
            | "INT UNSIGNED"
            | "INTEGER UNSIGNED"
            | "BIGINT UNSIGNED"
            | "YEAR" => ValueKind::Unsigned,
            "FLOAT" | "DOUBLE" | "REAL" => ValueKind::Float,
            "DECIMAL" | "NUMERIC" => ValueKind::Decimal,
            "DATE" => ValueKind::Date,
            "DATETIME" | "TIMESTAMP" => ValueKind::DateTime,
            "TIME" => ValueKind::Time,
            "JSON" => ValueKind::Json,
            "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM"
            | "SET" => ValueKind::Text,
            _ => ValueKind::Bytes, // BINARY, VARBINARY, *BLOB, BIT, GEOMETRY, unknown
        }
    }
}
