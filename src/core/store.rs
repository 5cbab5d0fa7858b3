use serde::Deserialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, error, warn};

use crate::error::HealthError;
use crate::models::HealthDocument;
use crate::models::document::DateKey;

/// Key under which the document lives in the medium.
pub const STORAGE_KEY: &str = "health_planner_v2";

/// Synchronous string key/value storage.
pub trait Medium {
    fn get(&self, key: &str) -> Result<Option<String>, HealthError>;
    fn set(&self, key: &str, value: &str) -> Result<(), HealthError>;
    fn remove(&self, key: &str) -> Result<(), HealthError>;
}

/// In-process medium, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Medium whose writes always fail, as a full quota would.
    pub fn read_only() -> Self {
        Self {
            entries: RefCell::default(),
            read_only: true,
        }
    }

    /// Pre-seed a raw value, bypassing the store.
    pub fn with_raw(key: &str, value: &str) -> Self {
        let medium = Self::new();
        medium
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        medium
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Medium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, HealthError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HealthError> {
        if self.read_only {
            return Err(HealthError::StorageUnavailable("quota exceeded".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HealthError> {
        if self.read_only {
            return Err(HealthError::StorageUnavailable("medium is read-only".into()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Owner of the persisted [`HealthDocument`].
///
/// Loads never fail: anything missing or unreadable degrades to defaults.
/// Stored documents are merged onto the defaults one top-level key at a time,
/// so fields added in later versions appear with default values while older
/// documents keep everything they already had. That shallow merge is the only
/// schema versioning mechanism.
pub struct StateStore<M: Medium> {
    medium: M,
    key: String,
}

impl<M: Medium> StateStore<M> {
    pub fn new(medium: M) -> Self {
        Self::with_key(medium, STORAGE_KEY)
    }

    pub fn with_key(medium: M, key: &str) -> Self {
        Self {
            medium,
            key: key.to_string(),
        }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Read the document, merged over defaults stamped `today`.
    pub fn load(&self, today: DateKey) -> HealthDocument {
        let defaults = HealthDocument::new(today);
        let raw = match self.medium.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return defaults,
            Err(e) => {
                warn!(error = %e, "could not read stored document, using defaults");
                return defaults;
            }
        };
        match merge_over_defaults(&defaults, &raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "stored document is unusable, using defaults");
                defaults
            }
        }
    }

    /// Persist the whole document in one write. Returns `false` when the
    /// write was dropped; the previously stored value is then unchanged.
    pub fn save(&self, doc: &HealthDocument) -> bool {
        let payload = match serde_json::to_string(doc) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "failed to serialize document, write dropped");
                return false;
            }
        };
        match self.medium.set(&self.key, &payload) {
            Ok(()) => {
                debug!(bytes = payload.len(), "document saved");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to persist document, write dropped");
                false
            }
        }
    }

    /// Delete the stored document. The next `load` starts from defaults.
    pub fn reset(&self) -> bool {
        match self.medium.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to remove stored document");
                false
            }
        }
    }
}

/// Shallow union of the stored object over the defaults. Each top-level key
/// is taken from storage only if the document still deserializes with it;
/// a key that does not fit keeps its default and the rest survive.
fn merge_over_defaults(defaults: &HealthDocument, raw: &str) -> anyhow::Result<HealthDocument> {
    let parsed: Value = serde_json::from_str(raw)?;
    let Value::Object(stored) = parsed else {
        anyhow::bail!("stored document is not a JSON object");
    };
    let mut merged = serde_json::to_value(defaults)?;
    if !merged.is_object() {
        anyhow::bail!("default document did not serialize to an object");
    }

    for (key, value) in stored {
        if merged.get(&key).is_none() {
            continue;
        }
        let previous = merged
            .as_object_mut()
            .and_then(|fields| fields.insert(key.clone(), value));
        if let Err(e) = HealthDocument::deserialize(&merged) {
            warn!(key = %key, error = %e, "stored field is unusable, keeping its default");
            if let (Some(fields), Some(previous)) = (merged.as_object_mut(), previous) {
                fields.insert(key, previous);
            }
        }
    }
    Ok(serde_json::from_value(merged)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::Theme;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn empty_medium_loads_defaults() {
        let store = StateStore::new(MemoryMedium::new());
        assert_eq!(store.load(day(1)), HealthDocument::new(day(1)));
    }

    #[test]
    fn loads_are_independent_copies() {
        let store = StateStore::new(MemoryMedium::new());
        let mut a = store.load(day(1));
        a.water.glasses = 7;
        a.logs.insert(day(1), vec!["x".into()]);
        let b = store.load(day(1));
        assert_eq!(b.water.glasses, 0);
        assert!(b.logs.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = StateStore::new(MemoryMedium::new());
        let mut doc = store.load(day(2));
        doc.steps.steps = 4200;
        doc.theme = Theme::Dark;
        doc.logs.insert(day(2), vec!["b".into(), "a".into()]);
        assert!(store.save(&doc));
        assert_eq!(store.load(day(2)), doc);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let raw = r#"{"theme":"dark","water":{"date":"2024-03-01","glasses":5}}"#;
        let store = StateStore::new(MemoryMedium::with_raw(STORAGE_KEY, raw));
        let doc = store.load(day(1));
        assert_eq!(doc.theme, Theme::Dark);
        assert_eq!(doc.water.glasses, 5);
        assert!(doc.weekly.is_empty());
        assert_eq!(doc.sleep.date, day(1));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = r#"{"theme":"dark","someFutureField":[1,2,3]}"#;
        let store = StateStore::new(MemoryMedium::with_raw(STORAGE_KEY, raw));
        assert_eq!(store.load(day(1)).theme, Theme::Dark);
    }

    #[test]
    fn malformed_documents_yield_defaults() {
        for raw in ["{not json", "[1,2]", "42", "null"] {
            let store = StateStore::new(MemoryMedium::with_raw(STORAGE_KEY, raw));
            assert_eq!(store.load(day(1)), HealthDocument::new(day(1)), "raw: {raw}");
        }
    }

    #[test]
    fn bad_field_falls_back_alone() {
        let raw = r#"{"water":"lots","steps":{"date":"2024-03-01","steps":1200},"theme":"dark"}"#;
        let store = StateStore::new(MemoryMedium::with_raw(STORAGE_KEY, raw));
        let doc = store.load(day(1));
        assert_eq!(doc.water, HealthDocument::new(day(1)).water);
        assert_eq!(doc.steps.steps, 1200);
        assert_eq!(doc.theme, Theme::Dark);
    }

    #[test]
    fn failed_save_keeps_previous_value() {
        let store = StateStore::new(MemoryMedium::read_only());
        let doc = store.load(day(1));
        assert!(!store.save(&doc));
        assert!(store.medium().raw(STORAGE_KEY).is_none());
    }

    #[test]
    fn reset_removes_document() {
        let store = StateStore::new(MemoryMedium::new());
        let mut doc = store.load(day(1));
        doc.water.glasses = 3;
        store.save(&doc);
        assert!(store.reset());
        assert!(store.medium().raw(STORAGE_KEY).is_none());
        assert_eq!(store.load(day(1)).water.glasses, 0);
    }
}
