// tests/common/mod.rs
#![allow(dead_code, unused_macros)] // Not every test binary uses every helper

use async_trait::async_trait;
use once_cell::sync::Lazy;
use order_service::db::{NewOrderRow, OrderRow, OrderStore, StoreError, StoreResult};
use tracing::Level;

pub const SAMPLE_ORDER: &str = r#"{
  "id": "12345002",
  "status": "PENDING_INVOICE",
  "items": [{
    "id": "123456",
    "description": "a product description",
    "price": 12.40,
    "quantity": 1
  }],
  "total": 12.40,
  "currencyUnit": "USD"
}"#;

/// Builds the service exactly as `main.rs` does, on top of the given store.
macro_rules! init_test_app {
  ($store:expr) => {{
    let store: std::sync::Arc<dyn order_service::db::OrderStore> = $store;
    let state = order_service::AppState::new(store);
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(state))
        .wrap(tracing_actix_web::TracingLogger::default())
        .configure(order_service::web::configure_app_routes),
    )
    .await
  }};
}

pub fn order_json(id: &str, status: &str) -> serde_json::Value {
  serde_json::json!({
    "id": id,
    "status": status,
    "items": [{"id": "sku-1", "description": "widget", "price": 2.5, "quantity": 4}],
    "total": 10.0,
    "currencyUnit": "EUR"
  })
}

// --- Fault-injecting stores ---

/// Every operation fails as if the database were unreachable.
pub struct FailingStore;

fn unreachable_db() -> StoreError {
  StoreError::Connect(sqlx::Error::Protocol("connection refused".to_string()))
}

#[async_trait]
impl OrderStore for FailingStore {
  async fn insert(&self, _row: NewOrderRow) -> StoreResult<()> {
    Err(unreachable_db())
  }

  async fn update_status(&self, _id: &str, _status: &str) -> StoreResult<u64> {
    Err(unreachable_db())
  }

  async fn fetch_all(&self) -> StoreResult<Vec<OrderRow>> {
    Err(unreachable_db())
  }
}

/// Serves a fixed set of rows from `fetch_all`; writes are accepted and dropped.
pub struct FixedRowsStore(pub Vec<OrderRow>);

#[async_trait]
impl OrderStore for FixedRowsStore {
  async fn insert(&self, _row: NewOrderRow) -> StoreResult<()> {
    Ok(())
  }

  async fn update_status(&self, _id: &str, _status: &str) -> StoreResult<u64> {
    Ok(0)
  }

  async fn fetch_all(&self) -> StoreResult<Vec<OrderRow>> {
    Ok(self.0.clone())
  }
}

pub fn stored_row(id: &str) -> OrderRow {
  OrderRow {
    id: id.to_string(),
    status: "PAID".to_string(),
    items: br#"[{"id":"sku-1","description":"widget","price":2.5,"quantity":4}]"#.to_vec(),
    total: rust_decimal::Decimal::new(1000, 2),
    currency_unit: "EUR".to_string(),
    created_at: "2024-05-01 10:00:00".to_string(),
    updated_at: "2024-05-02 11:30:00".to_string(),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
