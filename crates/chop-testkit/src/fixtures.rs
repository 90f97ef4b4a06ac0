//! Test fixtures: a ready-made app over a shared in-memory backend.

use std::sync::Arc;

use chop::{App, AppConfig, MemoryStore};
use chop_core::{CatalogItem, Category, ItemId};

/// An initialized app plus a handle to its backend, so tests can
/// inspect persisted records or build a second app over the same data.
pub struct TestFixture {
    pub backend: Arc<MemoryStore>,
    pub app: App<MemoryStore>,
}

impl TestFixture {
    /// Fresh install: empty backend, initialized app.
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Fresh install with a specific configuration.
    pub async fn with_config(config: AppConfig) -> Self {
        let backend = Arc::new(MemoryStore::new());
        let mut app = App::with_store(Arc::clone(&backend), config);
        app.initialize().await;
        Self { backend, app }
    }

    /// Returning user: onboarded and signed up as Ada.
    pub async fn logged_in() -> Self {
        let mut fixture = Self::new().await;
        fixture
            .app
            .session_mut()
            .complete_onboarding()
            .await
            .expect("onboarding");
        fixture
            .app
            .session_mut()
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .expect("signup");
        fixture
    }

    /// A second app over the same backend, as after an app restart.
    pub async fn restarted(&self) -> App<MemoryStore> {
        let mut app = App::with_store(Arc::clone(&self.backend), AppConfig::default());
        app.initialize().await;
        app
    }
}

/// A minimal catalog item for tests that only care about id and price.
pub fn sample_item(id: &str, price: u64) -> CatalogItem {
    CatalogItem {
        id: ItemId::from(id),
        name: format!("Item {id}"),
        category: Category::Snacks,
        price,
        image: format!("https://example.com/{id}.jpg"),
        description: String::new(),
        rating: 4.0,
        prep_time: "5 mins".to_owned(),
    }
}
