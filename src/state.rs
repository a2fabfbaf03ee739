//! Session state shared by the MCP server and the command line.

use crate::config::Config;
use crate::error::Result;
use crate::index::{Index, IndexStore};
use std::path::Path;
use std::sync::Arc;

/// A search session: configuration plus the index it queries.
///
/// The index starts unloaded. Until a load succeeds, query handlers refuse
/// to run rather than searching an empty collection.
#[derive(Debug)]
pub struct SearchState {
    config: Config,
    store: IndexStore,
}

impl SearchState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: IndexStore::new(),
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Loaded index, if any.
    pub async fn index(&self) -> Option<Arc<Index>> {
        self.store.snapshot().await
    }

    pub async fn load_index(&self, path: &Path) -> Result<Arc<Index>> {
        self.store.load_file(path).await
    }

    /// Load the index named by the configuration, if it names one.
    ///
    /// A failure is logged and leaves the session unloaded; the index can
    /// still be loaded later through `load_index`.
    pub async fn load_configured_index(&self) {
        let Some(path) = self.config.index_path.as_deref() else {
            tracing::info!("No index configured; waiting for load_index");
            return;
        };

        if let Err(e) = self.load_index(path).await {
            tracing::warn!("Failed to load configured index: {:#}", e);
        }
    }
}
