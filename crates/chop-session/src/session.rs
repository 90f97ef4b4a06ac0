//! The session store: current user, registry, and onboarding flag.

use std::sync::Arc;

use tracing::{debug, warn};

use chop_core::{IdSource, User, UserId};
use chop_store::{keys, Storage, StorageExt, WritePolicy};

use crate::error::{Result, SessionError};
use crate::registry::{Registry, RegistryEntry};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// `initialize` has not run yet.
    Uninitialized,
    /// Logged out, onboarding not yet completed.
    NeedsOnboarding,
    /// Logged out, onboarding completed.
    LoggedOut,
    /// A user is logged in.
    LoggedIn,
}

/// A partial profile update. Fields left as `None` keep their current
/// value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
}

impl ProfileUpdate {
    fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(photo) = &self.photo {
            user.photo = photo.clone();
        }
    }
}

/// Owns current-user identity, the registered-user registry, and the
/// onboarding flag.
///
/// Constructed once at app start and passed by reference; no implicit
/// singleton. One logical owner drives it at a time, so operations take
/// `&mut self`.
pub struct SessionStore<S> {
    store: Arc<S>,
    policy: WritePolicy,
    ids: IdSource,
    current_user: Option<User>,
    onboarding_seen: bool,
    initialized: bool,
}

impl<S: Storage> SessionStore<S> {
    /// Create a store over the given backend. Call [`initialize`] before
    /// reading snapshots.
    ///
    /// [`initialize`]: SessionStore::initialize
    pub fn new(store: Arc<S>, policy: WritePolicy) -> Self {
        Self {
            store,
            policy,
            ids: IdSource::new(),
            current_user: None,
            onboarding_seen: false,
            initialized: false,
        }
    }

    /// Load the persisted session and onboarding flag.
    ///
    /// Fail-open: a backend read failure degrades to the logged-out,
    /// onboarding-required state and is logged, never surfaced.
    pub async fn initialize(&mut self) {
        match self.store.get_json::<User>(keys::USER).await {
            Ok(user) => self.current_user = user,
            Err(err) => {
                warn!(error = %err, "failed to load persisted session; starting logged out");
                self.current_user = None;
            }
        }

        match self.store.get_json::<bool>(keys::ONBOARDING).await {
            Ok(seen) => self.onboarding_seen = seen.unwrap_or(false),
            Err(err) => {
                warn!(error = %err, "failed to load onboarding flag; assuming not seen");
                self.onboarding_seen = false;
            }
        }

        self.initialized = true;
    }

    /// Log in with an email and password.
    ///
    /// On no match, returns [`SessionError::InvalidCredentials`] and
    /// leaves state untouched. The returned user never carries the
    /// credential.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let registry = self.load_registry().await?;
        let user = registry
            .authenticate(email, password)
            .cloned()
            .ok_or(SessionError::InvalidCredentials)?;

        let prev = self.current_user.replace(user.clone());
        self.persist_user(prev).await?;

        debug!(user = %user.id, "logged in");
        Ok(user)
    }

    /// Register a new account and log it in.
    ///
    /// Fails with [`SessionError::EmailExists`] if the email is already
    /// registered (case-sensitive exact match), altering nothing.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        let mut registry = self.load_registry().await?;
        if registry.email_taken(email) {
            return Err(SessionError::EmailExists(email.to_owned()));
        }

        let user = User {
            id: UserId::from(self.ids.next_id()),
            name: name.to_owned(),
            email: email.to_owned(),
            photo: avatar_url(name),
        };
        registry.insert(RegistryEntry {
            user: user.clone(),
            password: password.to_owned(),
        });

        if let Err(err) = self.store.set_json(keys::USERS, &registry).await {
            match self.policy {
                WritePolicy::Rollback => return Err(err.into()),
                WritePolicy::BestEffort => {
                    warn!(error = %err, "registry persist failed; account lives only in this session");
                }
            }
        }

        let prev = self.current_user.replace(user.clone());
        self.persist_user(prev).await?;

        debug!(user = %user.id, "signed up");
        Ok(user)
    }

    /// Clear the active session. The registry entry persists.
    pub async fn logout(&mut self) -> Result<()> {
        let prev = self.current_user.take();
        self.persist_user(prev).await?;
        debug!("logged out");
        Ok(())
    }

    /// Merge the given fields into the current user and persist.
    ///
    /// Errors with [`SessionError::NoActiveSession`] when logged out.
    /// Only the active-session copy is rewritten; the registry entry
    /// keeps its original fields, matching long-standing app behavior.
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<User> {
        let current = self
            .current_user
            .as_ref()
            .ok_or(SessionError::NoActiveSession)?;

        let mut updated = current.clone();
        update.apply(&mut updated);

        let prev = self.current_user.replace(updated.clone());
        self.persist_user(prev).await?;
        Ok(updated)
    }

    /// Mark the onboarding carousel as completed.
    pub async fn complete_onboarding(&mut self) -> Result<()> {
        let prev = self.onboarding_seen;
        self.onboarding_seen = true;

        if let Err(err) = self.store.set_json(keys::ONBOARDING, &true).await {
            match self.policy {
                WritePolicy::Rollback => {
                    self.onboarding_seen = prev;
                    return Err(err.into());
                }
                WritePolicy::BestEffort => {
                    warn!(error = %err, "onboarding flag persist failed; keeping in-memory state");
                }
            }
        }
        Ok(())
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Whether onboarding has been completed.
    pub fn onboarding_seen(&self) -> bool {
        self.onboarding_seen
    }

    /// Where the session currently stands.
    pub fn phase(&self) -> SessionPhase {
        if !self.initialized {
            SessionPhase::Uninitialized
        } else if self.current_user.is_some() {
            SessionPhase::LoggedIn
        } else if self.onboarding_seen {
            SessionPhase::LoggedOut
        } else {
            SessionPhase::NeedsOnboarding
        }
    }

    /// The backend this store persists through.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the registry. Unlike session load, this is an operation
    /// path: backend failures propagate instead of degrading, so a
    /// broken backend reports `Storage`, not `InvalidCredentials`.
    async fn load_registry(&self) -> Result<Registry> {
        Ok(self
            .store
            .get_json::<Registry>(keys::USERS)
            .await?
            .unwrap_or_default())
    }

    /// Persist the current user, or remove the record when logged out.
    /// Rolls `current_user` back to `prev` on failure under
    /// [`WritePolicy::Rollback`].
    async fn persist_user(&mut self, prev: Option<User>) -> Result<()> {
        let outcome = match &self.current_user {
            Some(user) => self.store.set_json(keys::USER, user).await,
            None => self.store.remove_item(keys::USER).await,
        };

        if let Err(err) = outcome {
            match self.policy {
                WritePolicy::Rollback => {
                    self.current_user = prev;
                    return Err(err.into());
                }
                WritePolicy::BestEffort => {
                    warn!(error = %err, "session persist failed; keeping in-memory state");
                }
            }
        }
        Ok(())
    }
}

/// Synthesized profile photo for new accounts, same scheme the app has
/// always used.
fn avatar_url(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("https://ui-avatars.com/api/?name={encoded}&background=f97316&color=fff")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chop_store::{MemoryStore, StorageError};
    use serde_json::Value;

    /// Backend whose every operation fails.
    struct BrokenStore;

    #[async_trait]
    impl Storage for BrokenStore {
        async fn get_item(&self, _key: &str) -> chop_store::Result<Option<Value>> {
            Err(StorageError::Backend("broken".to_owned()))
        }

        async fn set_item(&self, _key: &str, _value: Value) -> chop_store::Result<()> {
            Err(StorageError::Backend("broken".to_owned()))
        }

        async fn remove_item(&self, _key: &str) -> chop_store::Result<()> {
            Err(StorageError::Backend("broken".to_owned()))
        }
    }

    async fn fresh() -> SessionStore<MemoryStore> {
        let mut session = SessionStore::new(Arc::new(MemoryStore::new()), WritePolicy::Rollback);
        session.initialize().await;
        session
    }

    #[tokio::test]
    async fn signup_then_login_roundtrip() {
        let mut session = fresh().await;

        let created = session
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(created.email, "ada@example.com");
        assert!(created.photo.contains("ui-avatars.com"));
        assert_eq!(session.phase(), SessionPhase::LoggedIn);

        session.logout().await.unwrap();
        assert!(session.current_user().is_none());

        let back = session.login("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(back, created);
    }

    #[tokio::test]
    async fn login_wrong_password_leaves_state_alone() {
        let mut session = fresh().await;
        session
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        session.logout().await.unwrap();

        let err = session.login("ada@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn signup_duplicate_email_rejected() {
        let mut session = fresh().await;
        session
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();

        let err = session
            .signup("Eve", "ada@example.com", "other")
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::EmailExists(_)));

        // The first account still logs in; the second never existed.
        session.logout().await.unwrap();
        assert!(session.login("ada@example.com", "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn session_persists_across_stores() {
        let backend = Arc::new(MemoryStore::new());

        let mut first = SessionStore::new(Arc::clone(&backend), WritePolicy::Rollback);
        first.initialize().await;
        first
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        first.complete_onboarding().await.unwrap();

        let mut second = SessionStore::new(backend, WritePolicy::Rollback);
        second.initialize().await;
        assert_eq!(
            second.current_user().map(|u| u.email.as_str()),
            Some("ada@example.com")
        );
        assert!(second.onboarding_seen());
        assert_eq!(second.phase(), SessionPhase::LoggedIn);
    }

    #[tokio::test]
    async fn credential_never_persisted_on_session_record() {
        let backend = Arc::new(MemoryStore::new());
        let mut session = SessionStore::new(Arc::clone(&backend), WritePolicy::Rollback);
        session.initialize().await;
        session
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();

        let record = backend.get_item(keys::USER).await.unwrap().unwrap();
        assert!(record.get("password").is_none());

        let registry = backend.get_item(keys::USERS).await.unwrap().unwrap();
        let entry = registry
            .as_object()
            .unwrap()
            .values()
            .next()
            .unwrap()
            .clone();
        assert_eq!(entry.get("password").unwrap(), "hunter2");
    }

    #[tokio::test]
    async fn update_profile_requires_session() {
        let mut session = fresh().await;
        let err = session
            .update_profile(ProfileUpdate {
                name: Some("Ada".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::NoActiveSession));
    }

    #[tokio::test]
    async fn update_profile_merges_partial_fields() {
        let mut session = fresh().await;
        let created = session
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();

        let updated = session
            .update_profile(ProfileUpdate {
                name: Some("Ada L.".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Ada L.");
        assert_eq!(updated.email, created.email);
        assert_eq!(session.current_user().unwrap().name, "Ada L.");
    }

    #[tokio::test]
    async fn phases_follow_the_state_machine() {
        let mut session =
            SessionStore::new(Arc::new(MemoryStore::new()), WritePolicy::Rollback);
        assert_eq!(session.phase(), SessionPhase::Uninitialized);

        session.initialize().await;
        assert_eq!(session.phase(), SessionPhase::NeedsOnboarding);

        session.complete_onboarding().await.unwrap();
        assert_eq!(session.phase(), SessionPhase::LoggedOut);

        session
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(session.phase(), SessionPhase::LoggedIn);

        session.logout().await.unwrap();
        assert_eq!(session.phase(), SessionPhase::LoggedOut);
    }

    #[tokio::test]
    async fn initialize_is_fail_open() {
        let mut session = SessionStore::new(Arc::new(BrokenStore), WritePolicy::Rollback);
        session.initialize().await;

        assert!(session.current_user().is_none());
        assert!(!session.onboarding_seen());
        assert_eq!(session.phase(), SessionPhase::NeedsOnboarding);
    }

    #[tokio::test]
    async fn login_on_broken_backend_reports_storage_not_credentials() {
        let mut session = SessionStore::new(Arc::new(BrokenStore), WritePolicy::Rollback);
        session.initialize().await;

        let err = session.login("ada@example.com", "hunter2").await.unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
    }
}
