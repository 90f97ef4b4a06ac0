//! Error types for the app facade.

use chop_cart::CartError;
use chop_session::SessionError;
use chop_store::StorageError;
use thiserror::Error;

/// Errors that can occur through the app facade.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Cart error.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for app operations.
pub type Result<T> = std::result::Result<T, AppError>;
