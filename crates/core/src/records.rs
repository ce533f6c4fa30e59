//! Projection of parsed rows into JSON records
//!
//! Takes the row table produced by [`crate::csv::parse_csv`] and projects it
//! into an ordered sequence of key/value records, with column names taken
//! from a header row or synthesized as `column1..columnN`. Key order always
//! follows header order, and optional type coercion is applied uniformly
//! across all rows.

use serde_json::{Map, Value};

/// Structural errors raised while projecting rows into records.
///
/// These are user-visible conditions: no partial output is produced when one
/// of them is raised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("no data found")]
    NoData,

    #[error("header row contains empty column names")]
    EmptyHeaderName,
}

/// Project a parsed row table into an ordered list of JSON records.
///
/// With `has_header`, the first row supplies trimmed column names and the
/// remaining rows are data. Without it, columns are named `column1..columnN`
/// after the width of the first row. A missing trailing field reads as an
/// empty string. Coercion is applied only when `convert_types` is set; see
/// [`coerce_value`].
pub fn project_records(
    rows: &[Vec<String>],
    has_header: bool,
    convert_types: bool,
) -> Result<Vec<Map<String, Value>>, RecordError> {
    if rows.is_empty() {
        return Err(RecordError::NoData);
    }

    let (headers, data): (Vec<String>, &[Vec<String>]) = if has_header {
        let headers: Vec<String> = rows[0].iter().map(|h| h.trim().to_string()).collect();
        if headers.iter().any(|h| h.is_empty()) {
            return Err(RecordError::EmptyHeaderName);
        }
        (headers, &rows[1..])
    } else {
        // A lone empty field is what an empty textarea parses to upstream.
        if rows.len() == 1 && rows[0].len() == 1 && rows[0][0].is_empty() {
            return Ok(Vec::new());
        }
        let headers = (1..=rows[0].len()).map(|i| format!("column{i}")).collect();
        (headers, rows)
    };

    let mut records = Vec::with_capacity(data.len());

    for row in data {
        let mut record = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let field = row.get(i).map(String::as_str).unwrap_or("");
            let value = if convert_types {
                coerce_value(field)
            } else {
                Value::String(field.to_string())
            };
            record.insert(header.clone(), value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Coerce a raw field into a typed JSON value.
///
/// Empty string becomes null. A value whose entire trimmed text parses as a
/// finite number becomes a number (integer-valued input stays integral).
/// Case-insensitive `true`/`false` become booleans. Everything else stays a
/// string.
pub fn coerce_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }

    let trimmed = field.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            if let Some(n) = serde_json::Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }

    match trimmed.to_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(field.to_string()),
    }
}

/// Serialize records as a pretty-printed JSON array (2-space indent).
pub fn records_to_json(records: &[Map<String, Value>]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
