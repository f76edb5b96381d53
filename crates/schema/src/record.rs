//! Entity records and drafts
//!
//! An `EntityRecord` is one row as the remote store returned it; a
//! `RecordDraft` is user input on its way into an insert or edit. Both keep
//! values loosely typed because the spreadsheet endpoints return whatever
//! the sheet holds (numbers for IDs one day, strings the next).

use crate::entity::EntitySchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// EntityRecord
// ============================================================================

/// One row of entity data as returned by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct EntityRecord {
    fields: Map<String, Value>,
}

impl EntityRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Build a record from an iterator of name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a raw field value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field as text
    ///
    /// Numbers and booleans are stringified, since sheet-backed endpoints
    /// switch between `1` and `"1"` freely. Null and missing both yield
    /// `None`.
    pub fn get_str(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// The record's identity, stringified, per the schema's identity field
    pub fn id(&self, schema: &EntitySchema) -> Option<String> {
        self.get_str(&schema.id_field)
            .filter(|s| !s.trim().is_empty())
    }

    /// Field value for display, falling back to the field's placeholder
    /// when missing or blank
    pub fn display_value(&self, schema: &EntitySchema, field_name: &str) -> String {
        let placeholder = schema
            .field(field_name)
            .map(|f| f.placeholder.as_str())
            .unwrap_or("N/A");
        match self.get_str(field_name) {
            Some(s) if !s.trim().is_empty() => s,
            _ => placeholder.to_string(),
        }
    }

    /// Get the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume into the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Check whether the record has no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for EntityRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

// ============================================================================
// RecordDraft
// ============================================================================

/// User input for an insert or edit, keyed by wire field name
///
/// Drafts hold plain strings straight from form inputs. They are validated
/// against the schema before any payload is built; an edit draft carries
/// the target record's identity alongside.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordDraft {
    values: Map<String, Value>,
}

impl RecordDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Create a draft pre-filled from an existing record's editable fields
    pub fn from_record(schema: &EntitySchema, record: &EntityRecord) -> Self {
        let mut draft = Self::new();
        for field in schema.editable_fields() {
            if let Some(value) = record.get_str(&field.name) {
                draft.set(&field.name, value);
            }
        }
        draft
    }

    /// Set a field value (form input)
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), Value::String(value.into()));
    }

    /// Builder-style `set` for tests and seed data
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a field value, trimmed
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a field value trimmed of surrounding whitespace, or `""`
    pub fn get_trimmed(&self, name: &str) -> &str {
        self.get(name).map(str::trim).unwrap_or("")
    }

    /// Check whether a field is present and non-blank
    pub fn has_value(&self, name: &str) -> bool {
        !self.get_trimmed(name).is_empty()
    }

    /// Get the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume into the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityKind, schema};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_get_str_stringifies_numbers() {
        let mut record = EntityRecord::new();
        record.set("ID", json!(42));
        record.set("Name", "Espresso");
        assert_eq!(record.get_str("ID"), Some("42".to_string()));
        assert_eq!(record.get_str("Name"), Some("Espresso".to_string()));
        assert_eq!(record.get_str("Missing"), None);
    }

    #[test]
    fn test_record_id_uses_schema_identity_field() {
        let brand_schema = schema(EntityKind::Brand);
        let product_schema = schema(EntityKind::Product);

        let brand = EntityRecord::from_pairs([("ID", "7"), ("Brand Name", "Acme")]);
        let product = EntityRecord::from_pairs([("Id", "12"), ("Name", "Latte")]);

        assert_eq!(brand.id(&brand_schema), Some("7".to_string()));
        assert_eq!(product.id(&product_schema), Some("12".to_string()));
        // Wrong-cased identity does not match
        assert_eq!(product.id(&brand_schema), None);
    }

    #[test]
    fn test_display_value_falls_back_to_placeholder() {
        let brand_schema = schema(EntityKind::Brand);
        let record = EntityRecord::from_pairs([
            ("ID", "1"),
            ("Brand Name", "Acme"),
            ("Description", "   "),
        ]);

        assert_eq!(record.display_value(&brand_schema, "Brand Name"), "Acme");
        assert_eq!(
            record.display_value(&brand_schema, "Description"),
            "No description"
        );
        assert_eq!(record.display_value(&brand_schema, "Logo"), "N/A");
    }

    #[test]
    fn test_draft_from_record_takes_editable_fields_only() {
        let brand_schema = schema(EntityKind::Brand);
        let record = EntityRecord::from_pairs([
            ("ID", "1"),
            ("Logo", "https://example.com/acme.png"),
            ("Brand Name", "Acme"),
            ("Description", "Beans"),
            ("LastModified", "2024-01-01T00:00:00Z"),
        ]);

        let draft = RecordDraft::from_record(&brand_schema, &record);
        assert_eq!(draft.get("Brand Name"), Some("Acme"));
        assert_eq!(draft.get("Logo"), Some("https://example.com/acme.png"));
        assert_eq!(draft.get("ID"), None);
        assert_eq!(draft.get("LastModified"), None);
    }

    #[test]
    fn test_draft_trimming_and_presence() {
        let draft = RecordDraft::new()
            .with("Name", "  Latte  ")
            .with("Description", "   ");
        assert_eq!(draft.get_trimmed("Name"), "Latte");
        assert!(draft.has_value("Name"));
        assert!(!draft.has_value("Description"));
        assert!(!draft.has_value("Missing"));
    }

    #[test]
    fn test_record_serde_is_transparent() {
        let record = EntityRecord::from_pairs([("ID", "1"), ("Brand Name", "Acme")]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"ID": "1", "Brand Name": "Acme"}));

        let back: EntityRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
