// On-device key-value storage behind the wizards.
// Both backends are interchangeable through `KeyValueStore`; `AppState`
// carries one as `Arc<dyn KeyValueStore>`.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::errors::WizardError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque string store keyed by string.
///
/// Implement this to swap the backing storage without touching the wizard
/// or persistence code.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, WizardError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), WizardError>;
}
