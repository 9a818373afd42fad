// order_service/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{create_order_handler, list_orders_handler, update_order_handler};

// Bodies are decoded whatever their Content-Type, and any decode failure is a plain 400.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| AppError::MalformedBody(err.to_string()).into())
}

// Called from `main.rs` and from the integration tests to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config()).service(
    web::resource("/orders")
      .route(web::post().to(create_order_handler))
      .route(web::get().to(list_orders_handler)),
  );
  cfg.service(web::resource("/orders/{id}").route(web::put().to(update_order_handler)));
}
