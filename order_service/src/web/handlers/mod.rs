// order_service/src/web/handlers/mod.rs

pub mod order_handlers;

pub use order_handlers::{create_order_handler, list_orders_handler, update_order_handler};
