//! In-memory implementation of the Storage trait.
//!
//! Same semantics as the SQLite backend but nothing outlives the
//! process. Used in tests and as the ephemeral default.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::Storage;

/// In-memory storage backend.
///
/// Thread-safe via RwLock. All data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StorageExt;
    use serde_json::json;

    #[tokio::test]
    async fn get_set_remove() {
        let store = MemoryStore::new();

        assert!(store.get_item("cart").await.unwrap().is_none());

        store.set_item("cart", json!([{"id": "1"}])).await.unwrap();
        let value = store.get_item("cart").await.unwrap().unwrap();
        assert_eq!(value, json!([{"id": "1"}]));

        store.remove_item("cart").await.unwrap();
        assert!(store.get_item("cart").await.unwrap().is_none());

        // Removing an absent key is fine.
        store.remove_item("cart").await.unwrap();
    }

    #[tokio::test]
    async fn typed_roundtrip() {
        let store = MemoryStore::new();
        store.set_json("flag", &true).await.unwrap();
        assert_eq!(store.get_json::<bool>("flag").await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn overwrite_replaces() {
        let store = MemoryStore::new();
        store.set_item("k", json!(1)).await.unwrap();
        store.set_item("k", json!(2)).await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some(json!(2)));
        assert_eq!(store.len(), 1);
    }
}
