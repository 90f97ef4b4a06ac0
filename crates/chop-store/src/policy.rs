//! Write-failure policy for the state stores.

/// What a store does when a persistence write fails.
///
/// Every mutating store operation updates in-memory state first, then
/// persists. This policy decides what happens when the persist step
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Restore the previous in-memory state and surface the error.
    #[default]
    Rollback,
    /// Keep the new in-memory state, log a warning, and report success.
    /// The backend catches up on the next successful write of the same
    /// key.
    BestEffort,
}
