use async_trait::async_trait;

use super::errors::StoreError;

/// String key-value storage the list cache persists into.
///
/// Stands in for the browser's local storage: values are opaque strings
/// and a `set` replaces whatever was stored under the key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any prior value
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`; removing a missing key is not an error
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
