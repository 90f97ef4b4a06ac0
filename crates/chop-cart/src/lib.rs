//! # Chop Cart
//!
//! Cart and order-history state for the Chop ordering core.
//!
//! ## Overview
//!
//! [`CartStore`] owns the active cart lines and the historical order
//! list, persisting both through the storage backend, and emits
//! user-facing confirmation notices for the UI layer to surface.
//!
//! ## Key Types
//!
//! - [`CartStore`] - The cart state container
//! - [`CartNotice`] - Informational signals (item added, order placed)
//! - [`CartError`] - Typed, recoverable failures
//!
//! ## Invariants
//!
//! - At most one line per catalog item id; adding an existing item bumps
//!   its quantity.
//! - A line's quantity is always at least one; reaching zero removes it.
//! - Order history is newest first.
//! - Orders are snapshots: later cart mutation never changes them.
//! - On `place_order`, the history write lands before the cart-clear
//!   write, so a failure between the two leaves the order recorded.

pub mod cart;
pub mod error;
pub mod notice;

pub use cart::CartStore;
pub use error::{CartError, Result};
pub use notice::CartNotice;
