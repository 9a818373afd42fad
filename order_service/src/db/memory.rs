// order_service/src/db/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::{NewOrderRow, OrderRow, OrderStore, StoreError, StoreResult};
use crate::models::STORE_TIMESTAMP_FORMAT;

/// In-process stand-in for the `orders` table.
///
/// Behaves like the MySQL table where handlers can observe it: rows come back in insertion
/// order, `id` acts as the primary key, and timestamps are stamped and rendered by the store.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
  rows: Mutex<Vec<OrderRow>>,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.rows.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.lock().is_empty()
  }
}

fn store_now() -> String {
  Utc::now().format(STORE_TIMESTAMP_FORMAT).to_string()
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  async fn insert(&self, row: NewOrderRow) -> StoreResult<()> {
    let mut rows = self.rows.lock();
    if rows.iter().any(|existing| existing.id == row.id) {
      return Err(StoreError::DuplicateId(row.id));
    }
    let now = store_now();
    rows.push(OrderRow {
      id: row.id,
      status: row.status,
      items: row.items,
      total: row.total,
      currency_unit: row.currency_unit,
      created_at: now.clone(),
      updated_at: now,
    });
    Ok(())
  }

  async fn update_status(&self, id: &str, status: &str) -> StoreResult<u64> {
    let mut rows = self.rows.lock();
    match rows.iter_mut().find(|row| row.id == id) {
      Some(row) => {
        row.status = status.to_string();
        row.updated_at = store_now();
        Ok(1)
      }
      None => Ok(0),
    }
  }

  async fn fetch_all(&self) -> StoreResult<Vec<OrderRow>> {
    Ok(self.rows.lock().clone())
  }
}
