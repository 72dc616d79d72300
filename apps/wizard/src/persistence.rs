//! Hydrating and persisting wizard records through a `KeyValueStore`.
//!
//! Records are stored as a single JSON object under a fixed key per record type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::WizardError;
use crate::form::resume::ResumeRecord;
use crate::form::schema::FormRecord;
use crate::form::wizard::Wizard;
use crate::storage::KeyValueStore;

pub const RESUME_STORAGE_KEY: &str = "resumeData";

/// A record type that has a home in the key-value store.
pub trait PersistedRecord: FormRecord + Serialize + DeserializeOwned {
    const STORAGE_KEY: &'static str;
}

impl PersistedRecord for ResumeRecord {
    const STORAGE_KEY: &'static str = RESUME_STORAGE_KEY;
}

pub async fn load_snapshot<R: PersistedRecord>(
    store: &dyn KeyValueStore,
) -> Result<Option<R>, WizardError> {
    match store.get(R::STORAGE_KEY).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn save_snapshot<R: PersistedRecord>(
    store: &dyn KeyValueStore,
    record: &R,
) -> Result<(), WizardError> {
    let raw = serde_json::to_string(record)?;
    store.set(R::STORAGE_KEY, &raw).await
}

impl<R: PersistedRecord> Wizard<R> {
    /// Best-effort load of the saved record. Read or parse failures are logged
    /// and leave the current record untouched. Returns whether a snapshot was applied.
    pub async fn hydrate_from(&mut self, store: &dyn KeyValueStore) -> bool {
        match load_snapshot::<R>(store).await {
            Ok(Some(snapshot)) => {
                self.hydrate(snapshot);
                info!(key = R::STORAGE_KEY, "restored saved form");
                true
            }
            Ok(None) => {
                debug!(key = R::STORAGE_KEY, "no saved form");
                false
            }
            Err(e) => {
                warn!(key = R::STORAGE_KEY, error = %e, "failed to load saved form");
                false
            }
        }
    }

    /// Writes the full record under its storage key.
    pub async fn persist(&self, store: &dyn KeyValueStore) -> Result<(), WizardError> {
        save_snapshot(store, self.record()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::resume::ResumeField;
    use crate::form::schema::FormField;
    use crate::storage::{FileStore, MemoryStore};
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, WizardError> {
            Err(WizardError::Storage("unavailable".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), WizardError> {
            Err(WizardError::Storage("read-only".into()))
        }
    }

    fn awkward_record() -> ResumeRecord {
        let mut record = ResumeRecord::default();
        for (i, &field) in ResumeField::ALL.iter().enumerate() {
            record.set(field, format!("{i}: \"quoted\", {{braces}} \\ back\nline,:;"));
        }
        record
    }

    #[tokio::test]
    async fn test_round_trip_with_delimiter_characters() {
        let store = MemoryStore::new();
        let record = awkward_record();

        save_snapshot(&store, &record).await.unwrap();
        let loaded: Option<ResumeRecord> = load_snapshot(&store).await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        let wizard = Wizard::with_record(awkward_record());
        wizard.persist(&store).await.unwrap();

        let mut fresh = Wizard::<ResumeRecord>::new();
        assert!(fresh.hydrate_from(&store).await);
        assert_eq!(fresh.record(), wizard.record());
    }

    #[tokio::test]
    async fn test_stored_under_fixed_key() {
        let store = MemoryStore::new();
        let wizard = Wizard::with_record(ResumeRecord {
            name: "Kim".into(),
            ..ResumeRecord::default()
        });
        wizard.persist(&store).await.unwrap();

        let raw = store.get("resumeData").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "Kim");
    }

    #[tokio::test]
    async fn test_hydrate_without_snapshot_keeps_defaults() {
        let store = MemoryStore::new();
        let mut wizard = Wizard::<ResumeRecord>::new();
        assert!(!wizard.hydrate_from(&store).await);
        assert_eq!(wizard.record(), &ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_hydrate_swallows_read_failure() {
        let mut wizard = Wizard::<ResumeRecord>::new();
        assert!(!wizard.hydrate_from(&FailingStore).await);
        assert_eq!(wizard.record(), &ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_hydrate_swallows_parse_failure() {
        let store = MemoryStore::new();
        store.set(RESUME_STORAGE_KEY, "not json").await.unwrap();
        let mut wizard = Wizard::<ResumeRecord>::new();
        assert!(!wizard.hydrate_from(&store).await);
        assert_eq!(wizard.record(), &ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_persist_failure_is_returned() {
        let wizard = Wizard::<ResumeRecord>::new();
        let err = wizard.persist(&FailingStore).await.unwrap_err();
        assert!(matches!(err, WizardError::Storage(_)));
    }
}
