//! # Chop Core
//!
//! Core domain types for the Chop ordering core: users, cart lines,
//! orders, and the static menu catalog.
//!
//! ## Key Types
//!
//! - [`User`] - A registered user (credential never included)
//! - [`CartLine`] - One cart entry: catalog item reference plus quantity
//! - [`Order`] - An immutable snapshot of the cart at placement time
//! - [`CatalogItem`] - A static menu entry
//! - [`IdSource`] - Monotonic unique id generation for stores
//!
//! ## Invariants
//!
//! - A cart line always has `quantity >= 1`; a line reaching zero is
//!   removed, never stored at zero.
//! - Orders are immutable once created; `items` is an independent
//!   snapshot of the cart.
//! - Prices and totals are integers in the smallest whole display unit.

pub mod catalog;
pub mod time;
pub mod types;

pub use catalog::{CatalogItem, Category};
pub use time::{now_millis, IdSource};
pub use types::{CartLine, ItemId, Order, OrderId, OrderStatus, User, UserId};
