//! The registered-user registry.
//!
//! Persisted as a map of user id to user fields plus the credential.
//! The credential lives only here; the active-session copy of a user
//! never carries it.
//!
//! Credential comparison is plaintext equality. That matches the data
//! the app has always written and is a documented gap, not a security
//! design.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use chop_core::{User, UserId};

/// One registry entry: the user's public fields plus their credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

/// The full registry, keyed by user id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry(HashMap<UserId, RegistryEntry>);

impl Registry {
    /// Whether any entry already uses this email (case-sensitive exact
    /// match).
    pub fn email_taken(&self, email: &str) -> bool {
        self.0.values().any(|entry| entry.user.email == email)
    }

    /// Find the user matching both email and password.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        self.0
            .values()
            .find(|entry| entry.user.email == email && entry.password == password)
            .map(|entry| &entry.user)
    }

    /// Insert an entry, keyed by its user id.
    pub fn insert(&mut self, entry: RegistryEntry) {
        self.0.insert(entry.user.id.clone(), entry);
    }

    /// Look up an entry by user id.
    pub fn get(&self, id: &UserId) -> Option<&RegistryEntry> {
        self.0.get(id)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
