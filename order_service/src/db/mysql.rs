// order_service/src/db/mysql.rs

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{ConnectOptions, Connection, Row};
use tracing::{debug, instrument, warn};

use super::{NewOrderRow, OrderRow, OrderStore, StoreError, StoreResult};

const INSERT_ORDER_SQL: &str = "INSERT INTO orders (id, status, total, currency_unit, items) VALUES (?, ?, ?, ?, ?)";

const UPDATE_STATUS_SQL: &str = "UPDATE orders SET status = ? WHERE id = ?";

// The store renders timestamps itself so the service never sees driver-specific date types.
const SELECT_ORDERS_SQL: &str = "SELECT id, status, items, total, currency_unit, \
   DATE_FORMAT(created_at, '%Y-%m-%d %H:%i:%s'), \
   DATE_FORMAT(updated_at, '%Y-%m-%d %H:%i:%s') \
   FROM orders";

/// MySQL-backed gateway. Holds only the parsed connection target: every operation opens
/// its own connection and closes it before returning, whatever the statement's outcome.
#[derive(Debug, Clone)]
pub struct MySqlOrderStore {
  options: MySqlConnectOptions,
}

impl MySqlOrderStore {
  /// Parses `url` up front so a bad target fails at startup rather than on first request.
  pub fn from_url(url: &str) -> StoreResult<Self> {
    let options = MySqlConnectOptions::from_str(url).map_err(|e| StoreError::InvalidTarget(e.to_string()))?;
    Ok(Self { options })
  }

  async fn connect(&self) -> StoreResult<MySqlConnection> {
    self.options.connect().await.map_err(|e| {
      warn!("Failed to open order store connection: {}", e);
      StoreError::Connect(e)
    })
  }

  async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
      warn!("Order store connection did not close cleanly: {}", e);
    }
  }
}

fn order_row(row: &MySqlRow) -> Result<OrderRow, sqlx::Error> {
  Ok(OrderRow {
    id: row.try_get(0)?,
    status: row.try_get(1)?,
    items: row.try_get(2)?,
    total: row.try_get(3)?,
    currency_unit: row.try_get(4)?,
    created_at: row.try_get(5)?,
    updated_at: row.try_get(6)?,
  })
}

#[async_trait]
impl OrderStore for MySqlOrderStore {
  #[instrument(name = "db::insert_order", skip(self, row), fields(order_id = %row.id), err)]
  async fn insert(&self, row: NewOrderRow) -> StoreResult<()> {
    let order_id = row.id.clone();
    let mut conn = self.connect().await?;

    let result = sqlx::query(INSERT_ORDER_SQL)
      .bind(row.id)
      .bind(row.status)
      .bind(row.total)
      .bind(row.currency_unit)
      .bind(row.items)
      .execute(&mut conn)
      .await;
    Self::release(conn).await;

    match result {
      Ok(_) => Ok(()),
      Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(StoreError::DuplicateId(order_id)),
      Err(e) => Err(StoreError::Statement(e)),
    }
  }

  #[instrument(name = "db::update_order_status", skip(self, status), err)]
  async fn update_status(&self, id: &str, status: &str) -> StoreResult<u64> {
    let mut conn = self.connect().await?;

    let result = sqlx::query(UPDATE_STATUS_SQL)
      .bind(status)
      .bind(id)
      .execute(&mut conn)
      .await;
    Self::release(conn).await;

    let rows_affected = result?.rows_affected();
    debug!(rows_affected, "Order status update executed.");
    Ok(rows_affected)
  }

  #[instrument(name = "db::fetch_all_orders", skip(self), err)]
  async fn fetch_all(&self) -> StoreResult<Vec<OrderRow>> {
    let mut conn = self.connect().await?;

    let result = sqlx::query(SELECT_ORDERS_SQL).fetch_all(&mut conn).await;
    Self::release(conn).await;

    let rows = result?.iter().map(order_row).collect::<Result<Vec<_>, _>>()?;
    debug!(row_count = rows.len(), "Fetched order rows.");
    Ok(rows)
  }
}
