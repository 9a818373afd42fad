// order_service/src/lib.rs

//! HTTP service for creating, updating and listing orders.
//!
//! Three routes (`POST /orders`, `PUT /orders/{id}`, `GET /orders`) translate requests
//! directly into single statements against the `orders` table through an [`db::OrderStore`].

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
