//! JSON-file backed store: one object mapping keys to string values.
//!
//! Writes land in a temporary sibling file that is renamed over the target,
//! so a crash mid-write never leaves a truncated store behind.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::WizardError;
use crate::storage::KeyValueStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Where an unreadable store file is moved before the next write.
    fn corrupt_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    /// File contents, or `None` when the file is missing or blank.
    async fn read_text(&self) -> Result<Option<String>, WizardError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(&self, text: &str) -> Result<BTreeMap<String, String>, WizardError> {
        serde_json::from_str(text).map_err(|e| {
            WizardError::Storage(format!(
                "store file {} is not a JSON object of strings: {e}",
                self.path.display()
            ))
        })
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, WizardError> {
        match self.read_text().await? {
            Some(text) => self.parse(&text),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Like `read_all`, but a corrupt file is moved aside and treated as empty
    /// so writes keep working.
    async fn read_for_write(&self) -> Result<BTreeMap<String, String>, WizardError> {
        let Some(text) = self.read_text().await? else {
            return Ok(BTreeMap::new());
        };
        match self.parse(&text) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let aside = self.corrupt_path();
                warn!(error = %e, moved_to = %aside.display(), "discarding unreadable store file");
                tokio::fs::rename(&self.path, &aside).await?;
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), WizardError> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir).await?;

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| anyhow::Error::new(e).context("store writer task failed"))??;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, WizardError> {
        let mut entries = self.read_all().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), WizardError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await?;
        debug!(key, path = %self.path.display(), "store entry written");
        Ok(())
    }
}
