//! A storage wrapper with injectable failures.
//!
//! Wraps any backend and rejects reads and/or writes on demand, for
//! exercising fail-open load paths and write-failure policies.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use chop_store::{Result, Storage, StorageError};

/// Storage wrapper that can be told to fail.
pub struct FlakyStore<S> {
    inner: S,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl<S> FlakyStore<S> {
    /// Wrap a backend; everything works until told otherwise.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    /// Make subsequent writes and removals fail (or succeed again).
    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: Storage> Storage for FlakyStore<S> {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("injected read failure".to_owned()));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("injected write failure".to_owned()));
        }
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("injected write failure".to_owned()));
        }
        self.inner.remove_item(key).await
    }
}
