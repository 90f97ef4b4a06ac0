//! The cart store: active cart lines and order history.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use chop_core::{CartLine, CatalogItem, IdSource, ItemId, Order, OrderId, OrderStatus};
use chop_store::{keys, Storage, StorageExt, WritePolicy};

use crate::error::{CartError, Result};
use crate::notice::CartNotice;

/// Owns the active cart and the historical order list.
///
/// Order history is kept newest first: `orders()[0]` is always the most
/// recently placed order. Constructed once at app start; one logical
/// owner drives it at a time.
pub struct CartStore<S> {
    store: Arc<S>,
    policy: WritePolicy,
    ids: IdSource,
    items: Vec<CartLine>,
    orders: Vec<Order>,
    notices: broadcast::Sender<CartNotice>,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over the given backend. `notice_capacity` bounds
    /// the broadcast buffer for unread notices.
    pub fn new(store: Arc<S>, policy: WritePolicy, notice_capacity: usize) -> Self {
        let (notices, _) = broadcast::channel(notice_capacity.max(1));
        Self {
            store,
            policy,
            ids: IdSource::new(),
            items: Vec::new(),
            orders: Vec::new(),
            notices,
        }
    }

    /// Load the persisted cart and order history. Absent or unreadable
    /// data degrades to empty with a logged warning.
    pub async fn initialize(&mut self) {
        match self.store.get_json::<Vec<CartLine>>(keys::CART).await {
            Ok(items) => self.items = items.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "failed to load persisted cart; starting empty");
                self.items = Vec::new();
            }
        }

        match self.store.get_json::<Vec<Order>>(keys::ORDERS).await {
            Ok(orders) => self.orders = orders.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "failed to load order history; starting empty");
                self.orders = Vec::new();
            }
        }
    }

    /// Add a catalog item to the cart.
    ///
    /// An existing line for the same item id gets its quantity bumped by
    /// one; otherwise a new line starts at quantity one. Emits
    /// [`CartNotice::ItemAdded`] on success.
    pub async fn add_item(&mut self, item: &CatalogItem) -> Result<()> {
        let prev = self.items.clone();

        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                image: item.image.clone(),
                quantity: 1,
            }),
        }

        self.persist_cart(prev).await?;
        self.notify(CartNotice::ItemAdded {
            name: item.name.clone(),
        });
        Ok(())
    }

    /// Remove the line for `item_id` from the cart, if present.
    pub async fn remove_item(&mut self, item_id: &ItemId) -> Result<()> {
        let prev = self.items.clone();
        self.items.retain(|line| &line.id != item_id);
        self.persist_cart(prev).await
    }

    /// Adjust the quantity of the line for `item_id` by `delta`.
    ///
    /// A resulting quantity of zero or less drops the line entirely; a
    /// line is never kept (or persisted) at quantity zero. No-op if the
    /// id is not in the cart.
    pub async fn change_quantity(&mut self, item_id: &ItemId, delta: i64) -> Result<()> {
        let Some(pos) = self.items.iter().position(|line| &line.id == item_id) else {
            return Ok(());
        };

        let prev = self.items.clone();
        let new_quantity = i64::from(self.items[pos].quantity) + delta;
        if new_quantity > 0 {
            self.items[pos].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        } else {
            self.items.remove(pos);
        }

        self.persist_cart(prev).await
    }

    /// Sum of `price * quantity` over all lines. Pure.
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines. Pure.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Place an order from the current cart.
    ///
    /// Fails with [`CartError::EmptyCart`] on an empty cart, mutating
    /// nothing. Otherwise snapshots the lines and total into a new
    /// `Pending` order, prepends it to the history, persists the
    /// history, then clears and persists the cart.
    ///
    /// The history write lands before the cart write. If the cart write
    /// fails after the history write succeeded, the order stays recorded
    /// and the cart is restored; losing a cart-clear is recoverable,
    /// losing a placed order is not.
    pub async fn place_order(&mut self) -> Result<Order> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let order = Order {
            id: OrderId::from(self.ids.next_id()),
            items: self.items.clone(),
            total: self.total(),
            placed_at: Utc::now(),
            status: OrderStatus::Pending,
        };

        self.orders.insert(0, order.clone());
        if let Err(err) = self.store.set_json(keys::ORDERS, &self.orders).await {
            match self.policy {
                WritePolicy::Rollback => {
                    self.orders.remove(0);
                    return Err(err.into());
                }
                WritePolicy::BestEffort => {
                    warn!(error = %err, "order history persist failed; keeping in-memory state");
                }
            }
        }

        let prev_items = std::mem::take(&mut self.items);
        if let Err(err) = self.store.set_json(keys::CART, &self.items).await {
            match self.policy {
                WritePolicy::Rollback => {
                    // The order is already recorded; only the cart-clear
                    // failed. Restore the cart to match the backend and
                    // surface the failure.
                    self.items = prev_items;
                    return Err(err.into());
                }
                WritePolicy::BestEffort => {
                    warn!(error = %err, "cart-clear persist failed; keeping in-memory state");
                }
            }
        }

        debug!(order = %order.id, total = order.total, "order placed");
        self.notify(CartNotice::OrderPlaced {
            order_id: order.id.clone(),
        });
        Ok(order)
    }

    /// Empty the cart unconditionally and persist.
    pub async fn clear_cart(&mut self) -> Result<()> {
        let prev = std::mem::take(&mut self.items);
        self.persist_cart(prev).await
    }

    /// Current cart lines.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Order history, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Subscribe to user-facing notices.
    pub fn subscribe(&self) -> broadcast::Receiver<CartNotice> {
        self.notices.subscribe()
    }

    /// The backend this store persists through.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn notify(&self, notice: CartNotice) {
        // Nobody listening is fine.
        let _ = self.notices.send(notice);
    }

    /// Persist the cart lines. Rolls `items` back to `prev` on failure
    /// under [`WritePolicy::Rollback`].
    async fn persist_cart(&mut self, prev: Vec<CartLine>) -> Result<()> {
        if let Err(err) = self.store.set_json(keys::CART, &self.items).await {
            match self.policy {
                WritePolicy::Rollback => {
                    self.items = prev;
                    return Err(err.into());
                }
                WritePolicy::BestEffort => {
                    warn!(error = %err, "cart persist failed; keeping in-memory state");
                }
            }
        }
        Ok(())
    }
}
