//! Storage trait: the abstract key-value interface the stores persist
//! through.
//!
//! This trait keeps the state stores storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests and ephemeral use).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// The Storage trait: async key-value persistence over JSON values.
///
/// Semantics follow device-local storage: `get_item` on a missing key is
/// `None`, not an error; `set_item` overwrites; `remove_item` on a
/// missing key succeeds.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: Value) -> Result<()>;

    /// Delete the value under `key`. Succeeds if the key is absent.
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// Extension trait for typed reads and writes through serde.
#[async_trait]
pub trait StorageExt: Storage {
    /// Read and decode the value under `key`.
    async fn get_json<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned;

    /// Encode and store `value` under `key`.
    async fn set_json<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync;
}

#[async_trait]
impl<S: Storage + ?Sized> StorageExt for S {
    async fn get_json<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get_item(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn set_json<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let value = serde_json::to_value(value)?;
        self.set_item(key, value).await
    }
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key).await
    }
}
