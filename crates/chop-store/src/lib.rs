//! # Chop Store
//!
//! Persistence abstraction for the Chop ordering core. Provides a
//! trait-based async key-value interface with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The state stores (session, cart) persist through the [`Storage`]
//! trait, keeping them storage-agnostic. The primary implementation is
//! [`SqliteStore`], with [`MemoryStore`] for tests and ephemeral runs.
//!
//! ## Key Types
//!
//! - [`Storage`] - The async trait for key-value persistence
//! - [`StorageExt`] - Typed serde reads/writes over any [`Storage`]
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage
//! - [`WritePolicy`] - What stores do when a persistence write fails
//! - [`keys`] - The well-known record names
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chop_store::{SqliteStore, Storage, StorageExt};
//!
//! async fn example() {
//!     let store = SqliteStore::open("chop.db").unwrap();
//!
//!     store.set_json(chop_store::keys::ONBOARDING, &true).await.unwrap();
//!     let seen: Option<bool> = store
//!         .get_json(chop_store::keys::ONBOARDING)
//!         .await
//!         .unwrap();
//!     assert_eq!(seen, Some(true));
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Missing key is not an error**: `get_item` returns `None`.
//! - **Overwrite semantics**: `set_item` replaces unconditionally.
//! - **JSON values**: records keep the exact JSON shapes the mobile app
//!   has historically written, so existing device data stays readable.

pub mod error;
pub mod keys;
pub mod memory;
pub mod migration;
pub mod policy;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StorageError};
pub use memory::MemoryStore;
pub use policy::WritePolicy;
pub use sqlite::SqliteStore;
pub use traits::{Storage, StorageExt};
