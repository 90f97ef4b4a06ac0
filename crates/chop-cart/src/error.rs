//! Error types for the cart store.

use chop_store::StorageError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// `place_order` was called on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The persistence backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
