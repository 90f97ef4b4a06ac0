//! Strong type definitions for the ordering core.
//!
//! Identifiers are newtypes to prevent mixing a user id with an item or
//! order id at compile time. All persisted shapes serialize to the same
//! JSON the mobile app has historically written to device storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// View the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a registered user.
    UserId
}

string_id! {
    /// Identifier of a catalog item. Cart lines reference catalog items
    /// through this id.
    ItemId
}

string_id! {
    /// Identifier of a placed order.
    OrderId
}

/// A registered user, as exposed to the rest of the application.
///
/// The credential never appears here; it lives only in the registry
/// entry (see the session crate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Profile photo URL.
    pub photo: String,
}

/// One entry in the cart: a catalog item reference plus a quantity.
///
/// Invariant: `quantity >= 1`. A line whose quantity would reach zero is
/// removed from the cart instead, and is never persisted at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    /// Unit price in the smallest whole display unit.
    pub price: u64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Price contribution of this line: unit price times quantity.
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// Fulfillment status of an order.
///
/// Only `Pending` is produced by this core; the remaining states exist
/// for the (out of scope) fulfillment flow and for decoding records
/// written by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Delivered,
    Cancelled,
}

/// A placed order: a snapshot of the cart at placement time.
///
/// Immutable once created. `items` is an independent copy and does not
/// change when the cart is later mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    /// Total in the smallest whole display unit, frozen at placement.
    pub total: u64,
    /// When the order was placed. Serialized under the historical
    /// `date` field name.
    #[serde(rename = "date")]
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
}
