//! Key-value store adapters.

pub mod file;
pub mod memory;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::models::{CacheConfig, StoreKind};
use crate::domain::ports::KeyValueStore;

pub use file::FileStore;
pub use memory::InMemoryStore;

/// Build the store selected by the cache configuration.
pub fn build_store(config: &CacheConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.store {
        StoreKind::Memory => Ok(Arc::new(InMemoryStore::new())),
        StoreKind::File => {
            let path = config
                .path
                .as_deref()
                .context("cache.path is required for the file store")?;
            Ok(Arc::new(FileStore::new(path)))
        }
    }
}
