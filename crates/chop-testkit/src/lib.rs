//! # Chop Testkit
//!
//! Testing utilities for the Chop ordering core.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: ready-made apps over a shared in-memory backend,
//!   including a signed-up user and restart simulation
//! - **FlakyStore**: a storage wrapper with injectable read/write
//!   failures, for exercising fail-open loads and write policies
//! - **Generators**: proptest strategies for cart operation sequences
//!
//! ## Fixtures
//!
//! ```rust,ignore
//! use chop_testkit::TestFixture;
//!
//! let mut fixture = TestFixture::logged_in().await;
//! fixture.app.cart_mut().add_item(&item).await.unwrap();
//! let restarted = fixture.restarted().await;
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use chop_testkit::generators::cart_ops;
//!
//! proptest! {
//!     #[test]
//!     fn invariants_hold(ops in cart_ops(40)) {
//!         // drive a CartStore with ops, assert invariants
//!     }
//! }
//! ```

pub mod fixtures;
pub mod flaky;
pub mod generators;

pub use fixtures::{sample_item, TestFixture};
pub use flaky::FlakyStore;
pub use generators::{cart_op, cart_ops, catalog_item, item_id, CartOp};
