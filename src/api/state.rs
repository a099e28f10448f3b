//! Application state for the attendance ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ConfigLoader;
use crate::store::{ClearConfirmation, RecordStore};

/// Shared application state.
///
/// Holds the loaded configuration, the record store, and the pending bulk
/// clear confirmation.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RecordStore>,
    clear_confirmation: Arc<Mutex<ClearConfirmation>>,
}

impl AppState {
    /// Creates state using the record file named in the configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let store = RecordStore::new(config.config().data_file.clone());
        Self::with_store(config, store)
    }

    /// Creates state with an explicit record store.
    pub fn with_store(config: ConfigLoader, store: RecordStore) -> Self {
        let clear_confirmation =
            ClearConfirmation::new(config.config().clear_confirmation_ttl_secs);
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            clear_confirmation: Arc::new(Mutex::new(clear_confirmation)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the bulk clear confirmation state.
    pub fn clear_confirmation(&self) -> &Mutex<ClearConfirmation> {
        &self.clear_confirmation
    }
}
