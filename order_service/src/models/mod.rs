// order_service/src/models/mod.rs

//! Data structures exchanged over HTTP and persisted in the `orders` table.

pub mod order;
pub mod order_item;

pub use order::{CreateOrderResponse, NewOrder, Order, UpdateStatusRequest, STORE_TIMESTAMP_FORMAT};
pub use order_item::OrderItem;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like an absent key: the field keeps its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
