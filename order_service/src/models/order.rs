// order_service/src/models/order.rs

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{null_as_default, OrderItem};
use crate::db::{NewOrderRow, OrderRow};
use crate::errors::{AppError, Result};

/// How the store renders `created_at` / `updated_at` when listing orders.
pub const STORE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Create-order payload. Missing fields decode to empty values and are caught by [`NewOrder::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewOrder {
  #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
  pub id: String,
  #[serde(alias = "Status", deserialize_with = "null_as_default")]
  pub status: String,
  #[serde(alias = "Items", deserialize_with = "null_as_default")]
  pub items: Vec<OrderItem>,
  #[serde(alias = "Total", deserialize_with = "null_as_default")]
  pub total: Decimal,
  #[serde(alias = "CurrencyUnit", deserialize_with = "null_as_default")]
  pub currency_unit: String,
}

impl NewOrder {
  /// Boundary checks for creation. Status, prices and quantities are deliberately unchecked.
  pub fn validate(&self) -> Result<()> {
    if self.id.is_empty() {
      return Err(AppError::Validation("order id is required".to_string()));
    }
    if self.items.is_empty() {
      return Err(AppError::Validation("order must contain at least one item".to_string()));
    }
    if self.total <= Decimal::ZERO {
      return Err(AppError::Validation(format!(
        "order total must be greater than zero, got {}",
        self.total
      )));
    }
    if self.currency_unit.is_empty() {
      return Err(AppError::Validation("currency unit is required".to_string()));
    }
    Ok(())
  }

  /// Serializes the item list into the blob stored alongside the order.
  pub fn into_row(self) -> Result<NewOrderRow> {
    let items = serde_json::to_vec(&self.items)
      .map_err(|e| AppError::Internal(format!("Failed to serialize items for order '{}': {}", self.id, e)))?;
    Ok(NewOrderRow {
      id: self.id,
      status: self.status,
      total: self.total,
      currency_unit: self.currency_unit,
      items,
    })
  }
}

/// An order as returned by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: String,
  pub status: String,
  pub items: Vec<OrderItem>,
  pub total: Decimal,
  pub currency_unit: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

fn parse_store_timestamp(order_id: &str, column: &str, raw: &str) -> Result<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(raw, STORE_TIMESTAMP_FORMAT)
    .map(|naive| naive.and_utc())
    .map_err(|e| AppError::row_decode(order_id, format!("{} '{}': {}", column, raw, e)))
}

impl TryFrom<OrderRow> for Order {
  type Error = AppError;

  fn try_from(row: OrderRow) -> Result<Self> {
    let created_at = parse_store_timestamp(&row.id, "created_at", &row.created_at)?;
    let updated_at = parse_store_timestamp(&row.id, "updated_at", &row.updated_at)?;
    let items: Vec<OrderItem> =
      serde_json::from_slice(&row.items).map_err(|e| AppError::row_decode(&row.id, format!("items: {}", e)))?;

    Ok(Order {
      id: row.id,
      status: row.status,
      items,
      total: row.total,
      currency_unit: row.currency_unit,
      created_at,
      updated_at,
    })
  }
}

/// Body of a successful `POST /orders`.
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
  pub id: String,
}

/// Body of `PUT /orders/{id}`. An absent or null status is written as the empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
  #[serde(alias = "Status", deserialize_with = "null_as_default")]
  pub status: String,
}
