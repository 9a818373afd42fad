// order_service/src/models/order_item.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One line of an order. Persisted only inside the order's serialized `items` blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
  #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
  pub id: String,
  #[serde(alias = "Description", deserialize_with = "null_as_default")]
  pub description: String,
  #[serde(alias = "Price", deserialize_with = "null_as_default")]
  pub price: Decimal,
  // No sign check: negative quantities are stored as given.
  #[serde(alias = "Quantity", deserialize_with = "null_as_default")]
  pub quantity: i64,
}
