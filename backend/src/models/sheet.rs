//! Helpers for spreadsheet cells as the script endpoints serialise them.
//!
//! Apps Script hands back whatever the cell holds: strings, numbers, booleans
//! or dates already rendered as ISO strings. Everything in this crate treats
//! cells as text, so the helpers here flatten a JSON value into a `String`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} columns in {record} row, found {found}")]
    ShortRow {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("expected a JSON array of {0} rows")]
    NotAList(&'static str),
    #[error("malformed {record} row: {message}")]
    Malformed {
        record: &'static str,
        message: String,
    },
    #[error("{record} row has an empty identifier")]
    MissingId { record: &'static str },
}

/// Renders a cell as text. Whole numbers lose their fractional part so an
/// employee id stored as `1001` does not come back as `1001.0`.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// `deserialize_with` adapter for header-keyed sheet rows.
pub fn de_cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(cell_to_string).unwrap_or_default())
}

/// Splits a script payload into rows, rejecting anything that is not a list.
pub fn expect_rows(value: Value, record: &'static str) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(rows) => Ok(rows),
        _ => Err(DecodeError::NotAList(record)),
    }
}
