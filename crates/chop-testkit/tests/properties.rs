//! Property tests for the cart invariants.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use chop_cart::{CartError, CartStore};
use chop_core::CartLine;
use chop_store::{keys, MemoryStore, StorageExt, WritePolicy};
use chop_testkit::generators::{cart_ops, CartOp};
use chop_testkit::sample_item;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

async fn drive(ops: &[CartOp]) -> (Arc<MemoryStore>, CartStore<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let mut cart = CartStore::new(Arc::clone(&backend), WritePolicy::Rollback, 8);
    cart.initialize().await;

    for op in ops {
        match op {
            CartOp::Add(item) => cart.add_item(item).await.expect("add"),
            CartOp::Remove(id) => cart.remove_item(id).await.expect("remove"),
            CartOp::Change(id, delta) => {
                cart.change_quantity(id, *delta).await.expect("change")
            }
            CartOp::Clear => cart.clear_cart().await.expect("clear"),
        }
    }
    (backend, cart)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_after_any_op_sequence(ops in cart_ops(40)) {
        runtime().block_on(async {
            let (backend, cart) = drive(&ops).await;

            // One line per id, never at quantity zero.
            let mut seen = HashSet::new();
            for line in cart.items() {
                assert!(line.quantity >= 1);
                assert!(seen.insert(line.id.clone()), "duplicate line for {}", line.id);
            }

            // Totals are pure sums over the lines.
            let expected_total: u64 =
                cart.items().iter().map(CartLine::line_total).sum();
            let expected_count: u32 =
                cart.items().iter().map(|line| line.quantity).sum();
            assert_eq!(cart.total(), expected_total);
            assert_eq!(cart.item_count(), expected_count);

            // The backend always holds what the store holds.
            let persisted: Vec<CartLine> = backend
                .get_json(keys::CART)
                .await
                .expect("read cart")
                .unwrap_or_default();
            assert_eq!(persisted, cart.items().to_vec());
        });
    }

    #[test]
    fn repeated_adds_accumulate_into_one_line(k in 1u32..20) {
        runtime().block_on(async {
            let item = sample_item("7", 250);
            let backend = Arc::new(MemoryStore::new());
            let mut cart = CartStore::new(backend, WritePolicy::Rollback, 8);
            cart.initialize().await;

            for _ in 0..k {
                cart.add_item(&item).await.expect("add");
            }

            assert_eq!(cart.items().len(), 1);
            assert_eq!(cart.items()[0].quantity, k);
            assert_eq!(cart.total(), 250 * u64::from(k));
        });
    }

    #[test]
    fn removing_the_full_quantity_always_drops_the_line(qty in 1u32..10) {
        runtime().block_on(async {
            let item = sample_item("2", 100);
            let backend = Arc::new(MemoryStore::new());
            let mut cart = CartStore::new(backend, WritePolicy::Rollback, 8);
            cart.initialize().await;

            for _ in 0..qty {
                cart.add_item(&item).await.expect("add");
            }
            cart.change_quantity(&item.id, -i64::from(qty))
                .await
                .expect("change");

            assert!(cart.items().is_empty());
        });
    }

    #[test]
    fn placed_orders_are_frozen_snapshots(ops in cart_ops(30)) {
        runtime().block_on(async {
            let (_backend, mut cart) = drive(&ops).await;
            let total_before = cart.total();
            let lines_before = cart.items().to_vec();

            match cart.place_order().await {
                Err(CartError::EmptyCart) => {
                    assert!(lines_before.is_empty());
                    assert!(cart.orders().is_empty());
                }
                Ok(order) => {
                    assert!(!lines_before.is_empty());
                    assert_eq!(order.total, total_before);
                    assert_eq!(order.items, lines_before);
                    assert!(cart.items().is_empty());
                    assert_eq!(cart.orders()[0], order);

                    // Later mutation leaves the snapshot untouched.
                    cart.add_item(&sample_item("1", 999)).await.expect("add");
                    assert_eq!(cart.orders()[0].items, lines_before);
                    assert_eq!(cart.orders()[0].total, total_before);
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        });
    }
}
