//! # Chop Session
//!
//! Local authentication and session state for the Chop ordering core.
//!
//! ## Overview
//!
//! [`SessionStore`] owns the current-user identity, the registered-user
//! registry, and the onboarding flag, persisting all three through the
//! storage backend. It is a pure state container: it knows nothing
//! about rendering.
//!
//! ## Key Types
//!
//! - [`SessionStore`] - The session state container
//! - [`SessionPhase`] - Where the session stands (state machine)
//! - [`ProfileUpdate`] - Partial profile edit
//! - [`Registry`] / [`RegistryEntry`] - The persisted account registry
//! - [`SessionError`] - Typed, recoverable failures
//!
//! ## Design Notes
//!
//! - **Fail-open loads**: `initialize` degrades to logged-out on backend
//!   read failure and logs it; the caller never fails.
//! - **Plaintext credentials**: registry comparison is literal equality,
//!   kept for compatibility with existing device records. This is a
//!   documented gap, not a security design.
//! - **Memory first, then persist**: mutations update in-memory state,
//!   then write through; the [`WritePolicy`](chop_store::WritePolicy)
//!   decides whether a failed write rolls back or logs.

pub mod error;
pub mod registry;
pub mod session;

pub use error::{Result, SessionError};
pub use registry::{Registry, RegistryEntry};
pub use session::{ProfileUpdate, SessionPhase, SessionStore};
