//! User-facing confirmation signals.
//!
//! The cart store emits notices over a broadcast channel so the UI
//! layer can surface toasts or alerts. Emission is fire-and-forget:
//! nobody listening is not an error, and no operation blocks on it.

use chop_core::OrderId;

/// An informational signal for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartNotice {
    /// A catalog item was added to the cart.
    ItemAdded { name: String },
    /// An order was placed successfully.
    OrderPlaced { order_id: OrderId },
}
