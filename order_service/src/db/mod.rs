// order_service/src/db/mod.rs

//! The database gateway: one statement per call against the `orders` table.

pub mod memory;
pub mod mysql;

pub use memory::MemoryOrderStore;
pub use mysql::MySqlOrderStore;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Failed to connect to the order store: {0}")]
  Connect(#[source] sqlx::Error),

  #[error("Order store statement failed: {0}")]
  Statement(#[from] sqlx::Error),

  #[error("Invalid order store connection target: {0}")]
  InvalidTarget(String),

  #[error("Duplicate entry '{0}' for key 'orders.PRIMARY'")]
  DuplicateId(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Values written by a single `INSERT` into `orders`. `items` is the serialized item list.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderRow {
  pub id: String,
  pub status: String,
  pub total: Decimal,
  pub currency_unit: String,
  pub items: Vec<u8>,
}

/// A row as read back from `orders`, before any decoding.
///
/// Timestamps are the store's own `YYYY-MM-DD HH:MM:SS` rendering and `items` is the
/// raw blob; turning them into typed values is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
  pub id: String,
  pub status: String,
  pub items: Vec<u8>,
  pub total: Decimal,
  pub currency_unit: String,
  pub created_at: String,
  pub updated_at: String,
}

/// Storage capability the HTTP handlers are written against.
#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn insert(&self, row: NewOrderRow) -> StoreResult<()>;

  /// Rewrites the status of `id`. Returns rows affected, which is zero for an unknown id.
  async fn update_status(&self, id: &str, status: &str) -> StoreResult<u64>;

  /// Every row in the table, in whatever order the store yields them.
  async fn fetch_all(&self) -> StoreResult<Vec<OrderRow>>;
}
