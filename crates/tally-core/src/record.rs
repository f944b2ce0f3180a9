//! Record model shared by every list view.
//!
//! A [`Record`] is an opaque, ordered mapping from field name to display value,
//! identified by a required `id`. Records are produced by the caller's data
//! source and are never mutated by the table.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::DataError;

/// Name of the identifying field.
pub const ID_FIELD: &str = "id";

/// Name of the field rendered as a status badge.
pub const STATUS_FIELD: &str = "status";

/// Record identifier: JSON integers and strings are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Extract an id from a JSON value. Floats, booleans and containers are rejected.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordId::Number),
            Value::String(s) if !s.is_empty() => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            RecordId::Number(n) => Value::from(*n),
            RecordId::Text(s) => Value::from(s.as_str()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordId::Number(n) => serializer.serialize_i64(*n),
            RecordId::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Number(value.into())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

/// Pre-rendered display text with an optional style class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub text: String,
    pub class: Option<String>,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

/// A single display value held by a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Fragment(Fragment),
}

impl FieldValue {
    /// Convert a JSON value. Nested containers are summarised rather than flattened.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => FieldValue::Number(n.clone()),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(arr) if arr.is_empty() => FieldValue::Text("[]".to_string()),
            Value::Array(arr) => FieldValue::Text(format!("[{} items]", arr.len())),
            Value::Object(obj) if obj.is_empty() => FieldValue::Text("{}".to_string()),
            Value::Object(obj) => FieldValue::Text(format!("{{{} items}}", obj.len())),
        }
    }

    /// String form used for display and for search matching. `Null` is empty.
    pub fn as_display(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Bool(b) => Cow::Owned(b.to_string()),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Fragment(f) => Cow::Borrowed(f.text.as_str()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Number(n) => n.serialize(serializer),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Fragment(f) => serializer.serialize_str(&f.text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(FieldValue::Number)
            .unwrap_or(FieldValue::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Fragment> for FieldValue {
    fn from(value: Fragment) -> Self {
        FieldValue::Fragment(value)
    }
}

impl From<&RecordId> for FieldValue {
    fn from(value: &RecordId) -> Self {
        match value {
            RecordId::Number(n) => FieldValue::from(*n),
            RecordId::Text(s) => FieldValue::from(s.as_str()),
        }
    }
}

/// Anything the record table can display.
///
/// [`Record`] implements it; callers with strongly typed rows can implement it
/// directly instead of converting to a map.
pub trait TableRecord {
    fn id(&self) -> &RecordId;

    /// String form of a field, or `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Cell content for a field; override to carry a style class.
    fn cell(&self, name: &str) -> Option<Fragment> {
        self.field(name).map(|text| Fragment::plain(text.into_owned()))
    }

    fn status(&self) -> Option<Cow<'_, str>> {
        self.field(STATUS_FIELD)
    }
}

/// Generic business record (vendor, bill, invoice, ledger entry, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create a record holding only its `id` field.
    pub fn new(id: impl Into<RecordId>) -> Self {
        let id = id.into();
        let mut fields = IndexMap::new();
        fields.insert(ID_FIELD.to_string(), FieldValue::from(&id));
        Self { id, fields }
    }

    /// Builder-style field insertion. The `id` field is fixed at construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let key = key.into();
        if key != ID_FIELD {
            self.fields.insert(key, value.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build a record from a JSON object; `index` is only used for error reporting.
    pub fn from_json(index: usize, value: &Value) -> Result<Self, DataError> {
        let object = value
            .as_object()
            .ok_or(DataError::NotAnObject { index })?;
        let id = object
            .get(ID_FIELD)
            .and_then(RecordId::from_json)
            .ok_or(DataError::MissingId { index })?;

        let mut record = Record::new(id);
        for (key, value) in object {
            if key != ID_FIELD {
                record
                    .fields
                    .insert(key.clone(), FieldValue::from_json(value));
            }
        }
        Ok(record)
    }
}

impl TableRecord for Record {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).map(FieldValue::as_display)
    }

    fn cell(&self, name: &str) -> Option<Fragment> {
        self.fields.get(name).map(|value| match value {
            FieldValue::Fragment(fragment) => fragment.clone(),
            other => Fragment::plain(other.as_display().into_owned()),
        })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Convert a JSON array into records, enforcing id uniqueness within the set.
pub fn records_from_json(values: &[Value]) -> Result<Vec<Record>, DataError> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let record = Record::from_json(index, value)?;
        if !seen.insert(record.id.clone()) {
            return Err(DataError::DuplicateId {
                id: record.id.to_string(),
            });
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_json_keeps_field_order() {
        let value = json!({"id": 7, "vendor": "Acme", "amount": "$10", "paid": true});
        let record = Record::from_json(0, &value).expect("valid record");

        assert_eq!(record.id(), &RecordId::Number(7));
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "vendor", "amount", "paid"]);
        assert_eq!(record.field("paid").as_deref(), Some("true"));
        assert_eq!(record.field("id").as_deref(), Some("7"));
    }

    #[test]
    fn test_record_id_variants() {
        assert_eq!(RecordId::from_json(&json!(12)), Some(RecordId::Number(12)));
        assert_eq!(
            RecordId::from_json(&json!("INV-001")),
            Some(RecordId::Text("INV-001".to_string()))
        );
        assert_eq!(RecordId::from_json(&json!(1.5)), None);
        assert_eq!(RecordId::from_json(&json!("")), None);
        assert_eq!(RecordId::from_json(&json!(null)), None);
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = Record::from_json(3, &json!({"vendor": "Acme"})).unwrap_err();
        assert!(matches!(err, DataError::MissingId { index: 3 }));

        let err = Record::from_json(1, &json!("not an object")).unwrap_err();
        assert!(matches!(err, DataError::NotAnObject { index: 1 }));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let values = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 1})];
        let err = records_from_json(&values).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { ref id } if id == "1"));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from_json(&json!(null)).as_display(), "");
        assert_eq!(FieldValue::from_json(&json!(12.5)).as_display(), "12.5");
        assert_eq!(FieldValue::from_json(&json!([1, 2, 3])).as_display(), "[3 items]");
        assert_eq!(FieldValue::from_json(&json!({"a": 1})).as_display(), "{1 items}");
        assert_eq!(FieldValue::from_json(&json!([])).as_display(), "[]");
    }

    #[test]
    fn test_fragment_cell_keeps_class() {
        let record = Record::new(1).with("total", Fragment::styled("$1,200", "bold"));
        let cell = record.cell("total").expect("cell present");
        assert_eq!(cell.text, "$1,200");
        assert_eq!(cell.class.as_deref(), Some("bold"));
        assert!(record.cell("missing").is_none());
    }

    #[test]
    fn test_id_field_is_fixed() {
        let record = Record::new(5).with("id", "other");
        assert_eq!(record.field("id").as_deref(), Some("5"));
    }

    #[test]
    fn test_record_serializes_as_flat_object() {
        let record = Record::new("b-1").with("vendor", "Acme").with("amount", 10);
        let value = serde_json::to_value(&record).expect("serializable");
        assert_eq!(value, json!({"id": "b-1", "vendor": "Acme", "amount": 10}));
    }
}
