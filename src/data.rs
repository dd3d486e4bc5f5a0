//! Loading table records from JSON files.
//!
//! A data file holds a JSON array of objects. Columns are inferred from the
//! keys of the first object, in file order.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::table::Column;

/// Errors from reading a data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read data file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse data file: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The top-level value is not an array.
    #[error("data file must contain a JSON array")]
    NotAnArray,

    /// An element of the array is not an object.
    #[error("element {0} is not a JSON object")]
    NotAnObject(usize),
}

/// Result type for data loading.
pub type Result<T> = std::result::Result<T, DataError>;

/// Read and check a JSON array of objects.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    let records = parse_records(&contents)?;
    info!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Parse a JSON array of objects.
pub fn parse_records(json: &str) -> Result<Vec<Value>> {
    let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
        return Err(DataError::NotAnArray);
    };
    if let Some(index) = records.iter().position(|record| !record.is_object()) {
        return Err(DataError::NotAnObject(index));
    }
    Ok(records)
}

/// One sortable column per key of the first record.
pub fn infer_columns(records: &[Value]) -> Vec<Column<Value>> {
    let Some(Value::Object(first)) = records.first() else {
        return Vec::new();
    };
    first
        .keys()
        .map(|key| Column::new(key.as_str(), header_title(key)).sortable(true))
        .collect()
}

/// `lastLogin` → "Last Login", `created_at` → "Created At".
fn header_title(key: &str) -> String {
    let mut title = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c == '_' || c == '-' {
            if !title.ends_with(' ') && !title.is_empty() {
                title.push(' ');
            }
            prev = Some(' ');
            continue;
        }
        match prev {
            None | Some(' ') => title.extend(c.to_uppercase()),
            Some(p) if c.is_uppercase() && p.is_lowercase() => {
                title.push(' ');
                title.push(c);
            }
            _ => title.push(c),
        }
        prev = Some(c);
    }
    title
}
