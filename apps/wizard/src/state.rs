use std::sync::Arc;

use crate::config::Config;
use crate::storage::{FileStore, KeyValueStore};

/// Shared application state handed to the front end.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable store. Default: `FileStore` at `config.store_path`.
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(FileStore::new(config.store_path.clone()));
        Self { config, store }
    }

    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self { config, store }
    }
}
