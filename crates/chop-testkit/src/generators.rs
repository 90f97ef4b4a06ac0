//! Proptest strategies for cart state.
//!
//! Item ids are drawn from a small pool so generated operation
//! sequences actually hit the merge-into-existing-line and
//! drop-at-zero paths.

use proptest::prelude::*;

use chop_core::{CatalogItem, Category, ItemId};

use crate::fixtures::sample_item;

/// An id from a pool of eight.
pub fn item_id() -> impl Strategy<Value = ItemId> {
    (1u8..=8).prop_map(|n| ItemId::from(n.to_string()))
}

/// A catalog item with an id from the pool and an arbitrary small
/// price. The price is a function of the id so two generated items with
/// the same id are the same item.
pub fn catalog_item() -> impl Strategy<Value = CatalogItem> {
    item_id().prop_map(|id| {
        let price = 100 * (1 + id.as_str().parse::<u64>().unwrap_or(1));
        let mut item = sample_item(id.as_str(), price);
        item.category = Category::Lunch;
        item
    })
}

/// One cart mutation.
#[derive(Debug, Clone)]
pub enum CartOp {
    Add(CatalogItem),
    Remove(ItemId),
    Change(ItemId, i64),
    Clear,
}

/// A single random cart operation.
pub fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        4 => catalog_item().prop_map(CartOp::Add),
        1 => item_id().prop_map(CartOp::Remove),
        2 => (item_id(), -3i64..=3).prop_map(|(id, delta)| CartOp::Change(id, delta)),
        1 => Just(CartOp::Clear),
    ]
}

/// A random sequence of cart operations.
pub fn cart_ops(max_len: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(cart_op(), 0..max_len)
}
