// order_service/src/state.rs
use crate::config::{AppConfig, StoreBackend};
use crate::db::{MemoryOrderStore, MySqlOrderStore, OrderStore};
use crate::errors::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn OrderStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn OrderStore>) -> Self {
    Self { store }
  }

  /// Builds the store selected by `config.store_backend`. No connection is opened here.
  pub fn from_config(config: &AppConfig) -> Result<Self> {
    let store: Arc<dyn OrderStore> = match config.store_backend {
      StoreBackend::MySql => Arc::new(MySqlOrderStore::from_url(&config.database_url)?),
      StoreBackend::Memory => {
        tracing::warn!("Using the in-memory order store; orders are lost on restart.");
        Arc::new(MemoryOrderStore::new())
      }
    };
    Ok(Self::new(store))
  }
}
