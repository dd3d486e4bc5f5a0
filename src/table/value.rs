//! Cell values and the record capability.
//!
//! The table never assumes a concrete record shape. Anything that can project
//! a named field to an optional [`CellValue`] can be displayed, sorted and
//! selected. `serde_json::Value` objects and string-keyed maps implement
//! [`Record`] out of the box.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

/// Date format recognised in text and JSON values.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A comparable value projected out of a record.
///
/// Absent values are represented by `Option::None` at the call sites, never
/// by a variant of this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Free text.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
}

impl CellValue {
    /// Parse text into a value, recognising `YYYY-MM-DD` dates.
    pub fn parse_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match NaiveDate::parse_from_str(&text, DATE_FORMAT) {
            Ok(date) => CellValue::Date(date),
            Err(_) => CellValue::Text(text),
        }
    }

    /// Convert a JSON value. `null` is absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(CellValue::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(CellValue::Int(i)),
                None => n.as_f64().map(CellValue::Float),
            },
            Value::String(s) => Some(CellValue::parse_text(s.as_str())),
            other => Some(CellValue::Text(other.to_string())),
        }
    }

    /// Compare two present values by the natural ordering of their type.
    ///
    /// Integers and floats compare numerically with each other. Values of
    /// unrelated types fall back to a fixed variant rank so the ordering stays
    /// total even for malformed columns.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::Float(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Borrow the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the date, if this is a date value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

/// Capability required of anything displayed in a table.
pub trait Record {
    /// Project the named field, or `None` when the field is absent.
    fn field(&self, name: &str) -> Option<CellValue>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).and_then(CellValue::from_json)
    }
}

impl Record for BTreeMap<String, CellValue> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).cloned()
    }
}

impl Record for HashMap<String, CellValue> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).cloned()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<CellValue> {
        (**self).field(name)
    }
}
