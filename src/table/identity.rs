//! Row identity resolution.
//!
//! Selection membership is tracked by [`RowKey`], derived from each record by
//! a [`RowKeySource`].

use std::fmt;

use super::value::{CellValue, Record};

/// Field read when no row key configuration is supplied.
pub const DEFAULT_KEY_FIELD: &str = "id";

/// The identity of a row: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    /// Numeric identity (also used for the positional fallback).
    Num(i64),
    /// String identity.
    Str(String),
}

impl From<CellValue> for RowKey {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Int(i) => RowKey::Num(i),
            CellValue::Text(s) => RowKey::Str(s),
            other => RowKey::Str(other.to_string()),
        }
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        RowKey::Num(value)
    }
}

impl From<u32> for RowKey {
    fn from(value: u32) -> Self {
        RowKey::Num(i64::from(value))
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Str(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey::Str(value)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Num(n) => write!(f, "{}", n),
            RowKey::Str(s) => f.write_str(s),
        }
    }
}

/// How a row's identity is derived from its record.
pub enum RowKeySource<T> {
    /// Read the named field; an absent field falls back to the row's
    /// positional index in the displayed sequence.
    Field(String),
    /// Apply a function to the record. The index is not consulted.
    Func(Box<dyn Fn(&T) -> RowKey>),
}

impl<T> RowKeySource<T> {
    /// Read identities from the named field.
    pub fn field(name: impl Into<String>) -> Self {
        RowKeySource::Field(name.into())
    }

    /// Derive identities with a function of the record.
    pub fn func(f: impl Fn(&T) -> RowKey + 'static) -> Self {
        RowKeySource::Func(Box::new(f))
    }
}

impl<T: Record> RowKeySource<T> {
    /// Resolve the identity of `record` sitting at `index` in the displayed
    /// sequence.
    pub fn resolve(&self, record: &T, index: usize) -> RowKey {
        match self {
            RowKeySource::Field(name) => record
                .field(name)
                .map(RowKey::from)
                .unwrap_or(RowKey::Num(index as i64)),
            RowKeySource::Func(f) => f(record),
        }
    }
}

impl<T> Default for RowKeySource<T> {
    fn default() -> Self {
        RowKeySource::Field(DEFAULT_KEY_FIELD.to_string())
    }
}

impl<T> fmt::Debug for RowKeySource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKeySource::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKeySource::Func(_) => f.write_str("Func(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_default_reads_id_field() {
        let source: RowKeySource<Value> = RowKeySource::default();
        let record = json!({"id": 12, "name": "A"});
        assert_eq!(source.resolve(&record, 0), RowKey::Num(12));
    }

    #[test]
    fn test_field_falls_back_to_index() {
        let source: RowKeySource<Value> = RowKeySource::field("uuid");
        let record = json!({"id": 12});
        assert_eq!(source.resolve(&record, 4), RowKey::Num(4));

        let record = json!({"uuid": null});
        assert_eq!(source.resolve(&record, 2), RowKey::Num(2));
    }

    #[test]
    fn test_field_text_and_other_values() {
        let source: RowKeySource<Value> = RowKeySource::field("key");
        assert_eq!(
            source.resolve(&json!({"key": "abc"}), 0),
            RowKey::Str("abc".to_string())
        );
        assert_eq!(
            source.resolve(&json!({"key": 1.5}), 0),
            RowKey::Str("1.5".to_string())
        );
    }

    #[test]
    fn test_zero_id_is_not_replaced_by_index() {
        let source: RowKeySource<Value> = RowKeySource::default();
        assert_eq!(source.resolve(&json!({"id": 0}), 3), RowKey::Num(0));
    }

    #[test]
    fn test_func_ignores_index() {
        let source: RowKeySource<Value> = RowKeySource::func(|record: &Value| {
            RowKey::from(record["email"].as_str().unwrap_or_default())
        });
        let record = json!({"email": "a@example.com"});
        assert_eq!(source.resolve(&record, 0), source.resolve(&record, 9));
        assert_eq!(source.resolve(&record, 0), RowKey::from("a@example.com"));
    }

    #[test]
    fn test_row_key_display() {
        assert_eq!(RowKey::Num(3).to_string(), "3");
        assert_eq!(RowKey::from("x").to_string(), "x");
    }
}
