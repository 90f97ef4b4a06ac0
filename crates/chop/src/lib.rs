//! # Chop
//!
//! The unified API for the Chop ordering core: catalog browsing state,
//! cart and order management, and local authentication, all over one
//! pluggable persistence backend.
//!
//! ## Overview
//!
//! The core is two collaborating state containers:
//!
//! - **Session**: current-user identity, the account registry, and the
//!   onboarding flag
//! - **Cart**: active cart lines and the order history, with
//!   user-facing confirmation notices
//!
//! Both persist through the async key-value [`Storage`] trait and know
//! nothing about rendering. [`App`] wires them over one shared backend.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chop::{App, AppConfig};
//! use chop::core::catalog;
//! use chop::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("chop.db").unwrap();
//!     let mut app = App::new(store, AppConfig::default());
//!     app.initialize().await;
//!
//!     app.session_mut()
//!         .signup("Ada", "ada@example.com", "hunter2")
//!         .await
//!         .unwrap();
//!
//!     let menu = catalog::menu();
//!     app.cart_mut().add_item(&menu[0]).await.unwrap();
//!     let order = app.checkout().await.unwrap();
//!     assert_eq!(order.total, menu[0].price);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `chop::core` - Domain types and the static catalog
//! - `chop::store` - Persistence backends
//! - `chop::session` - Session and authentication state
//! - `chop::cart` - Cart and order state

pub mod app;
pub mod error;

// Re-export component crates
pub use chop_cart as cart;
pub use chop_core as core;
pub use chop_session as session;
pub use chop_store as store;

// Re-export main types for convenience
pub use app::{App, AppConfig};
pub use error::{AppError, Result};

// Re-export commonly used component types
pub use chop_cart::{CartNotice, CartStore};
pub use chop_core::{CartLine, CatalogItem, ItemId, Order, OrderId, OrderStatus, User, UserId};
pub use chop_session::{ProfileUpdate, SessionPhase, SessionStore};
pub use chop_store::{MemoryStore, SqliteStore, Storage, StorageExt, WritePolicy};
