//! Frontend Models
//!
//! Schemas, their items, and the persisted blob layout.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, FieldError};

/// Opaque schema identifier assigned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(pub String);

impl SchemaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row inside a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the parent schema only
    pub id: String,
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub time: String,
}

impl Item {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            quantity: String::new(),
            time: String::new(),
        }
    }
}

/// Schema data structure (as persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub id: SchemaId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Schema {
    /// Check required fields before the schema is handed to the gateway
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(&self.name, &self.items)
    }
}

/// Create input: a schema without an id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl SchemaDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_fields(&self.name, &self.items)
    }

    pub fn with_id(self, id: SchemaId) -> Schema {
        Schema {
            id,
            name: self.name,
            description: self.description,
            items: self.items,
        }
    }
}

fn validate_fields(name: &str, items: &[Item]) -> AppResult<()> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::required("name"));
    }
    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            errors.push(FieldError::required(format!("items[{}].name", index)));
        }
        if item.quantity.trim().is_empty() {
            errors.push(FieldError::required(format!("items[{}].quantity", index)));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Next id in a decimal sequence.
///
/// Continues past both the largest numeric id in `ids` and `high_water`.
/// When that would overflow `u64`, falls back to the smallest unused id.
pub fn next_sequence_id<'a>(ids: impl IntoIterator<Item = &'a str>, high_water: u64) -> u64 {
    let used: BTreeSet<u64> = ids.into_iter().filter_map(|id| id.parse().ok()).collect();
    let max = used.last().copied().unwrap_or(0).max(high_water);
    match max.checked_add(1) {
        Some(next) => next,
        None => (1u64..).find(|n| !used.contains(n)).unwrap_or(0),
    }
}

/// The single JSON blob kept under the storage key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSchemas {
    pub schemas: Vec<Schema>,
    /// Highest schema id ever assigned, so deleted ids are not reused
    #[serde(default)]
    pub last_id: u64,
}

impl StoredSchemas {
    /// Payload returned when nothing has been stored yet
    pub fn bootstrap(seed_sample: bool) -> Self {
        if !seed_sample {
            return Self::default();
        }
        let item = |id: &str, name: &str, quantity: &str, time: &str| Item {
            id: id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            time: time.to_string(),
        };
        Self {
            schemas: vec![Schema {
                id: SchemaId::new("1"),
                name: "Morning workout".to_string(),
                description: "Sample schema, edit or delete it".to_string(),
                items: vec![
                    item("1", "Push-ups", "3x15", "10 min"),
                    item("2", "Squats", "3x20", "10 min"),
                    item("3", "Plank", "3", ""),
                ],
            }],
            last_id: 1,
        }
    }

    /// Allocate the next schema id and advance the high-water mark
    pub fn next_id(&mut self) -> SchemaId {
        let next = next_sequence_id(self.schemas.iter().map(|s| s.id.as_str()), self.last_id);
        self.last_id = self.last_id.max(next);
        SchemaId(next.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, quantity: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            time: String::new(),
        }
    }

    #[test]
    fn test_draft_requires_name() {
        let err = SchemaDraft::new("   ").validate().unwrap_err();
        assert_eq!(err, AppError::Validation(vec![FieldError::required("name")]));
        assert!(SchemaDraft::new("Test").validate().is_ok());
    }

    #[test]
    fn test_item_fields_are_validated_per_row() {
        let draft = SchemaDraft {
            name: "Legs".to_string(),
            description: String::new(),
            items: vec![make_item("1", "Squat", "5"), make_item("2", "", "")],
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field_message("items[1].name"), Some("This field is required"));
        assert_eq!(err.field_message("items[1].quantity"), Some("This field is required"));
        assert_eq!(err.field_message("items[0].name"), None);
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"{"schemas":[{"id":"7","name":"A","items":[{"id":"1","name":"x","quantity":"2"}]}]}"#;
        let stored: StoredSchemas = serde_json::from_str(json).unwrap();
        let schema = &stored.schemas[0];
        assert_eq!(schema.id, SchemaId::new("7"));
        assert_eq!(schema.description, "");
        assert_eq!(schema.items[0].time, "");
    }

    #[test]
    fn test_next_id_skips_past_max() {
        let mut stored = StoredSchemas::default();
        assert_eq!(stored.next_id(), SchemaId::new("1"));
        stored.schemas.push(SchemaDraft::new("a").with_id(SchemaId::new("4")));
        stored.schemas.push(SchemaDraft::new("b").with_id(SchemaId::new("legacy")));
        assert_eq!(stored.next_id(), SchemaId::new("5"));
        assert_eq!(stored.last_id, 5);
    }

    #[test]
    fn test_next_id_not_reused_after_delete() {
        let mut stored = StoredSchemas::default();
        let first = stored.next_id();
        let second = stored.next_id();
        stored.schemas.push(SchemaDraft::new("a").with_id(first));
        stored.schemas.push(SchemaDraft::new("b").with_id(second.clone()));
        stored.schemas.retain(|s| s.id != second);
        assert_eq!(stored.next_id(), SchemaId::new("3"));
    }

    #[test]
    fn test_next_id_at_u64_max_picks_unused_id() {
        let mut stored = StoredSchemas::default();
        stored.schemas.push(SchemaDraft::new("max").with_id(SchemaId::new(u64::MAX.to_string())));
        stored.schemas.push(SchemaDraft::new("one").with_id(SchemaId::new("1")));
        let id = stored.next_id();
        assert_eq!(id, SchemaId::new("2"));
        assert!(stored.schemas.iter().all(|s| s.id != id));
    }

    #[test]
    fn test_last_id_defaults_for_older_blobs() {
        let stored: StoredSchemas = serde_json::from_str(r#"{"schemas":[]}"#).unwrap();
        assert_eq!(stored.last_id, 0);
    }

    #[test]
    fn test_next_sequence_id() {
        assert_eq!(next_sequence_id(["3", "x", "1"], 0), 4);
        assert_eq!(next_sequence_id(["3"], 10), 11);
        assert_eq!(next_sequence_id(Vec::<&str>::new(), 0), 1);
        let max = u64::MAX.to_string();
        assert_eq!(next_sequence_id([max.as_str(), "1", "2"], 0), 3);
        assert_eq!(next_sequence_id(["5"], u64::MAX), 1);
    }

    #[test]
    fn test_bootstrap_sample_is_optional() {
        assert!(StoredSchemas::bootstrap(false).schemas.is_empty());
        let seeded = StoredSchemas::bootstrap(true);
        assert_eq!(seeded.schemas.len(), 1);
        assert!(seeded.schemas[0].validate().is_ok());
    }
}
