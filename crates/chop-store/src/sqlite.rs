//! SQLite implementation of the Storage trait.
//!
//! The primary on-device backend. Uses rusqlite with bundled SQLite,
//! wrapped in async via tokio::spawn_blocking. Values are stored as
//! JSON text in a single key-value table.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::error::{Result, StorageError};
use crate::migration;
use crate::traits::Storage;

/// SQLite-backed storage.
///
/// Thread-safe via an internal Mutex. Every operation runs on the
/// blocking pool to keep the async runtime responsive.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a database at the given path, creating and migrating it if
    /// needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory database. Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn on_blocking_pool<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StorageError::Backend(format!("mutex poisoned: {}", e)))?;
            f(&conn)
        })
        .await
        .map_err(|e| StorageError::Backend(format!("spawn_blocking failed: {}", e)))?
    }
}

#[async_trait]
impl Storage for SqliteStore {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        let key = key.to_owned();
        let text = self
            .on_blocking_pool(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT value FROM kv WHERE key = ?1",
                        params![key],
                        |row| row.get::<_, String>(0),
                    )
                    .optional()?)
            })
            .await?;

        match text {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        let key = key.to_owned();
        let text = serde_json::to_string(&value)?;
        self.on_blocking_pool(move |conn| {
            conn.execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, text, now_millis()],
            )?;
            Ok(())
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let key = key.to_owned();
        self.on_blocking_pool(move |conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
            Ok(())
        })
        .await
    }
}

fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::traits::StorageExt;
    use serde_json::json;

    #[tokio::test]
    async fn roundtrip_in_memory() {
        let store = SqliteStore::open_memory().unwrap();

        assert!(store.get_item(keys::CART).await.unwrap().is_none());

        let cart = json!([{"id": "3", "price": 300, "quantity": 1}]);
        store.set_item(keys::CART, cart.clone()).await.unwrap();
        assert_eq!(store.get_item(keys::CART).await.unwrap(), Some(cart));

        store.remove_item(keys::CART).await.unwrap();
        assert!(store.get_item(keys::CART).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_overwrites() {
        let store = SqliteStore::open_memory().unwrap();
        store.set_json(keys::ONBOARDING, &false).await.unwrap();
        store.set_json(keys::ONBOARDING, &true).await.unwrap();
        assert_eq!(
            store.get_json::<bool>(keys::ONBOARDING).await.unwrap(),
            Some(true)
        );
    }

    #[tokio::test]
    async fn survives_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chop.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set_item("user", json!({"id": "1"})).await.unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get_item("user").await.unwrap(),
            Some(json!({"id": "1"}))
        );
    }
}
