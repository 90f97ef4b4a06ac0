//! The App: unified entry point for the ordering core.
//!
//! Wires the session and cart stores over one shared persistence
//! backend. Built once at app start and passed by reference to
//! consumers; there are no module-level singletons.

use std::sync::Arc;

use tracing::debug;

use chop_cart::CartStore;
use chop_core::Order;
use chop_session::{SessionError, SessionStore};
use chop_store::{Storage, WritePolicy};

use crate::error::Result;

/// Configuration for the app facade.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// What the stores do when a persistence write fails.
    pub write_policy: WritePolicy,
    /// Buffer size of the cart's notice channel.
    pub notice_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            write_policy: WritePolicy::Rollback,
            notice_capacity: 16,
        }
    }
}

/// The ordering core: session plus cart over a shared backend.
///
/// The UI layer reads snapshots through [`session`](App::session) and
/// [`cart`](App::cart) and drives mutations through the `_mut`
/// accessors.
pub struct App<S: Storage> {
    session: SessionStore<S>,
    cart: CartStore<S>,
}

impl<S: Storage> App<S> {
    /// Build the app over a backend it takes ownership of.
    pub fn new(store: S, config: AppConfig) -> Self {
        Self::with_store(Arc::new(store), config)
    }

    /// Build the app over a shared backend handle.
    pub fn with_store(store: Arc<S>, config: AppConfig) -> Self {
        let session = SessionStore::new(Arc::clone(&store), config.write_policy);
        let cart = CartStore::new(store, config.write_policy, config.notice_capacity);
        Self { session, cart }
    }

    /// Load all persisted state. Fail-open: backend read failures
    /// degrade to empty state and are logged.
    pub async fn initialize(&mut self) {
        self.session.initialize().await;
        self.cart.initialize().await;
        debug!(phase = ?self.session.phase(), "app initialized");
    }

    /// The session store.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// The session store, for mutations.
    pub fn session_mut(&mut self) -> &mut SessionStore<S> {
        &mut self.session
    }

    /// The cart store.
    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// The cart store, for mutations.
    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// Place the current cart as an order for the logged-in user.
    ///
    /// Checkout requires an active session; otherwise the cart is left
    /// untouched and [`SessionError::NoActiveSession`] is returned.
    pub async fn checkout(&mut self) -> Result<Order> {
        if self.session.current_user().is_none() {
            return Err(SessionError::NoActiveSession.into());
        }
        Ok(self.cart.place_order().await?)
    }
}
