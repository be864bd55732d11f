//! Dynamic table row

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// A single row of table data.
///
/// Rows carry a string id (the table's `rowKey`) and their cells as a
/// `HashMap<String, Value>`. Cloning a record deep-copies every cell.
///
/// # Example
///
/// ```
/// use dashboard_lib::model::Record;
///
/// let record = Record::new("1")
///     .set("name", "Alice")
///     .set("age", 30);
///
/// assert_eq!(record.get_str("name"), Some("Alice"));
/// assert_eq!(record.get_int("age"), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// The row identifier.
    pub id: String,

    /// The cell values, keyed by field name. Never holds `id`.
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    ///
    /// Writing the field `id` replaces the record id instead, so the id is
    /// serialized once.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        if field == "id" {
            self.id = value.to_string();
            return;
        }
        self.fields.insert(field, value);
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value or `Value::Null` when the field is absent.
    ///
    /// The pseudo-field `id` resolves to the record id.
    pub fn value(&self, field: &str) -> Value {
        if field == "id" {
            return Value::String(self.id.clone());
        }
        self.fields.get(field).cloned().unwrap_or_default()
    }

    /// Returns the field as a string slice, if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns the field as an integer, if it is an integer.
    pub fn get_int(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(Value::as_i64)
    }

    /// All cell values except the id.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}
