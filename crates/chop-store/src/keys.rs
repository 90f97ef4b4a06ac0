//! Well-known storage keys.
//!
//! These match the record names the mobile app has always used in device
//! storage, so an upgraded app reads its existing data.

/// The active session's user (credential stripped).
pub const USER: &str = "user";

/// The registered-user registry: id -> user fields plus credential.
pub const USERS: &str = "users";

/// Whether the onboarding carousel has been completed.
pub const ONBOARDING: &str = "hasSeenOnboarding";

/// The active cart: sequence of cart lines.
pub const CART: &str = "cart";

/// Order history: sequence of orders, newest first.
pub const ORDERS: &str = "orders";
