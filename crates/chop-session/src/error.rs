//! Error types for the session store.

use chop_store::StorageError;
use thiserror::Error;

/// Errors that can occur during session operations.
///
/// All variants are recoverable; none is fatal to the process. The UI
/// layer decides how to present them.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No registry entry matches the given email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("email already registered: {0}")]
    EmailExists(String),

    /// The operation requires a logged-in user.
    #[error("no active session")]
    NoActiveSession,

    /// The persistence backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
