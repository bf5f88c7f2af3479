//! Value enum for dynamic cell values

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held by a [`Row`](super::Row) cell.
///
/// Rows are schemaless, so a cell can hold any of the types a table is
/// likely to display. `Null` is an explicit value and is treated the same
/// as an absent field by the comparators and matchers.
///
/// # Example
///
/// ```
/// use gridstate::model::Value;
///
/// let name = Value::from("Alice");
/// let age = Value::from(34i64);
/// let empty = Value::Null;
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Renders the value as display text.
    ///
    /// This is the form the matchers scan: `Null` renders empty, dates
    /// render as RFC 3339.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.to_rfc3339(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(Value::Null.display_text(), "");
        assert_eq!(Value::from("Alice").display_text(), "Alice");
        assert_eq!(Value::from(42i64).display_text(), "42");
        assert_eq!(Value::from(true).display_text(), "true");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    }

    #[test]
    fn test_serde_untagged_round_trip() {
        let json = serde_json::json!({"b": true, "n": 3, "f": 1.5, "s": "hi", "z": null});
        let b: Value = serde_json::from_value(json["b"].clone()).unwrap();
        let n: Value = serde_json::from_value(json["n"].clone()).unwrap();
        let f: Value = serde_json::from_value(json["f"].clone()).unwrap();
        let s: Value = serde_json::from_value(json["s"].clone()).unwrap();
        let z: Value = serde_json::from_value(json["z"].clone()).unwrap();
        assert_eq!(b, Value::Bool(true));
        assert_eq!(n, Value::Int(3));
        assert_eq!(f, Value::Float(1.5));
        assert_eq!(s, Value::String("hi".into()));
        assert_eq!(z, Value::Null);
    }
}
