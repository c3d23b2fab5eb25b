//! Row decoding
//!
//! Converts driver rows into dynamic [`Row`] maps, keyed by column name in
//! result column order.

use crate::sql::ValueKind;
use crate::types::{Row, Value};
use sqlx::mysql::MySqlRow;
use sqlx::mysql::types::MySqlTime;
use sqlx::{Column, Row as _, TypeInfo};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Decode every column of `row`.
/// A repeated column name keeps its first position and takes the last value.
pub fn decode_row(row: &MySqlRow) -> Result<Row, sqlx::Error> {
    let mut decoded = Row::with_capacity(row.columns().len());
    for column in row.columns() {
        let kind = ValueKind::from_type_name(column.type_info().name());
        let value = decode_column(row, column.ordinal(), kind)?;
        decoded.insert(column.name().to_string(), value);
    }
    Ok(decoded)
}

/// Decode a single column as `kind`. SQL NULL always becomes [`Value::Null`].
pub fn decode_column(row: &MySqlRow, index: usize, kind: ValueKind) -> Result<Value, sqlx::Error> {
    let value = match kind {
        ValueKind::Null => Value::Null,
        ValueKind::Bool => row
            .try_get::<Option<bool>, _>(index)?
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        ValueKind::Signed => row
            .try_get::<Option<i64>, _>(index)?
            .map(Value::from)
            .unwrap_or(Value::Null),
        // YEAR is not in the driver's unsigned compatibility list
        ValueKind::Unsigned => row
            .try_get_unchecked::<Option<u64>, _>(index)?
            .map(Value::from)
            .unwrap_or(Value::Null),
        ValueKind::Float => row
            .try_get::<Option<f64>, _>(index)?
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueKind::Decimal => row
            .try_get::<Option<rust_decimal::Decimal>, _>(index)?
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),
        ValueKind::Date => match row.try_get::<Option<chrono::NaiveDate>, _>(index) {
            Ok(date) => date
                .map(|d| Value::String(d.format(DATE_FORMAT).to_string()))
                .unwrap_or(Value::Null),
            Err(_) => raw_temporal(row, index, false)?,
        },
        ValueKind::DateTime => match row.try_get::<Option<chrono::NaiveDateTime>, _>(index) {
            Ok(dt) => dt
                .map(|dt| Value::String(dt.format(DATETIME_FORMAT).to_string()))
                .unwrap_or(Value::Null),
            Err(_) => raw_temporal(row, index, true)?,
        },
        // TIME is an interval: up to 838:59:59 and possibly negative
        ValueKind::Time => row
            .try_get::<Option<MySqlTime>, _>(index)?
            .map(|t| Value::String(t.to_string()))
            .unwrap_or(Value::Null),
        ValueKind::Json => row
            .try_get::<Option<sqlx::types::Json<Value>>, _>(index)?
            .map(|json| json.0)
            .unwrap_or(Value::Null),
        // ENUM and SET report text types the checked String decode rejects
        ValueKind::Text => row
            .try_get_unchecked::<Option<String>, _>(index)?
            .map(Value::String)
            .unwrap_or(Value::Null),
        ValueKind::Bytes => row
            .try_get_unchecked::<Option<Vec<u8>>, _>(index)?
            .map(bytes_to_value)
            .unwrap_or(Value::Null),
    };
    Ok(value)
}

/// Dates chrono cannot represent, such as `0000-00-00` or `2024-02-00`,
/// rendered from the column's raw payload
fn raw_temporal(row: &MySqlRow, index: usize, with_time: bool) -> Result<Value, sqlx::Error> {
    Ok(row
        .try_get_unchecked::<Option<Vec<u8>>, _>(index)?
        .map(|raw| Value::String(format_raw_temporal(&raw, with_time)))
        .unwrap_or(Value::Null))
}

/// Binary protocol layout: length byte, then year (u16 LE), month, day,
/// hour, minute, second and microseconds (u32 LE), trailing parts optional.
/// Anything else is taken to be the text form already.
pub(crate) fn format_raw_temporal(raw: &[u8], with_time: bool) -> String {
    let binary = raw
        .first()
        .is_some_and(|&len| matches!(len, 0 | 4 | 7 | 11) && raw.len() == len as usize + 1);
    if !binary {
        return String::from_utf8_lossy(raw).into_owned();
    }

    let part = |i: usize| raw.get(i + 1).copied().unwrap_or(0);
    let year = u16::from_le_bytes([part(0), part(1)]);
    let mut text = format!("{:04}-{:02}-{:02}", year, part(2), part(3));
    if with_time {
        text.push_str(&format!(" {:02}:{:02}:{:02}", part(4), part(5), part(6)));
        let micros = u32::from_le_bytes([part(7), part(8), part(9), part(10)]);
        if micros != 0 {
            text.push_str(&format!(".{:06}", micros));
        }
    }
    text
}

/// UTF-8 payloads become strings; anything else an array of byte values
pub(crate) fn bytes_to_value(bytes: Vec<u8>) -> Value {
    match String::from_utf8(bytes) {
        Ok(text) => Value::String(text),
        Err(e) => Value::Array(e.into_bytes().into_iter().map(Value::from).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_utf8_bytes_become_strings() {
        assert_eq!(bytes_to_value(b"hello".to_vec()), json!("hello"));
        assert_eq!(bytes_to_value(Vec::new()), json!(""));
    }

    #[test]
    fn test_binary_bytes_become_arrays() {
        assert_eq!(bytes_to_value(vec![0xff, 0x00, 0x10]), json!([255, 0, 16]));
    }

    #[test]
    fn test_zero_dates_from_binary_payload() {
        assert_eq!(format_raw_temporal(&[0], false), "0000-00-00");
        assert_eq!(format_raw_temporal(&[0], true), "0000-00-00 00:00:00");
        // 2024-02-00 is not a valid calendar date but MySQL can store it
        assert_eq!(format_raw_temporal(&[4, 0xe8, 0x07, 2, 0], false), "2024-02-00");
        assert_eq!(
            format_raw_temporal(&[11, 0xe8, 0x07, 2, 0, 13, 4, 5, 0x40, 0xe2, 0x01, 0], true),
            "2024-02-00 13:04:05.123456"
        );
    }

    #[test]
    fn test_text_payload_passes_through() {
        assert_eq!(format_raw_temporal(b"0000-00-00", false), "0000-00-00");
    }

    #[test]
    fn test_time_intervals_keep_hours_and_sign() {
        use sqlx::mysql::types::MySqlTimeSign;

        let long = MySqlTime::new(MySqlTimeSign::Positive, 100, 0, 0, 0).unwrap();
        assert_eq!(long.to_string(), "100:00:00");

        let negative = MySqlTime::new(MySqlTimeSign::Negative, 1, 30, 0, 0).unwrap();
        assert_eq!(negative.to_string(), "-01:30:00");
    }

    #[test]
    fn test_temporal_formats() {
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        assert_eq!(dt.format(DATETIME_FORMAT).to_string(), "2024-03-09 07:05:00");

        let dt = dt + chrono::Duration::milliseconds(250);
        assert_eq!(
            dt.format(DATETIME_FORMAT).to_string(),
            "2024-03-09 07:05:00.250"
        );
    }
}
