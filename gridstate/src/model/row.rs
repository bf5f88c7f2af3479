//! Dynamic table row

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// A dynamic table row.
///
/// Rows hold cell values as a `HashMap<String, Value>`, allowing the table
/// core to look fields up by name without a schema. Typed getter methods
/// provide safe access with proper error handling.
///
/// # Example
///
/// ```
/// use gridstate::model::Row;
///
/// let row = Row::new()
///     .set("name", "Alice")
///     .set("age", 34i64);
///
/// assert_eq!(row.get_str("name").unwrap(), Some("Alice"));
/// assert_eq!(row.get_i64("age").unwrap(), Some(34));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the field value for ordering purposes.
    ///
    /// An absent field and an explicit `Value::Null` are both `None`.
    pub fn sortable_value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Renders a field as display text for matching.
    ///
    /// Absent fields and nulls render as the empty string.
    pub fn display_text(&self, field: &str) -> String {
        self.sortable_value(field)
            .map(Value::display_text)
            .unwrap_or_default()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if the field is missing or has the wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_str(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an i64 field value.
    pub fn get_i64(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    ///
    /// Integer values widen to f64.
    pub fn get_f64(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a datetime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }
}

impl From<HashMap<String, Value>> for Row {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getter_missing() {
        let row = Row::new();
        assert_eq!(row.get_str("name"), Err(FieldError::missing("name")));
    }

    #[test]
    fn test_typed_getter_null() {
        let row = Row::new().set("name", Value::Null);
        assert_eq!(row.get_str("name"), Ok(None));
    }

    #[test]
    fn test_typed_getter_mismatch() {
        let row = Row::new().set("age", 34i64);
        assert_eq!(
            row.get_str("age"),
            Err(FieldError::type_mismatch("age", "string", "int"))
        );
    }

    #[test]
    fn test_int_widens_to_float() {
        let row = Row::new().set("age", 34i64);
        assert_eq!(row.get_f64("age").unwrap(), Some(34.0));
    }

    #[test]
    fn test_display_text_absent_is_empty() {
        let row = Row::new().set("a", Value::Null);
        assert_eq!(row.display_text("a"), "");
        assert_eq!(row.display_text("b"), "");
    }

    #[test]
    fn test_from_json_object() {
        let row: Row =
            serde_json::from_value(serde_json::json!({"name": "Alice", "age": 34})).unwrap();
        assert_eq!(row.get_str("name").unwrap(), Some("Alice"));
        assert_eq!(row.get_i64("age").unwrap(), Some(34));
    }
}
