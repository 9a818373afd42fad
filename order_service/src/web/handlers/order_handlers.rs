// order_service/src/web/handlers/order_handlers.rs

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use tracing::{debug, info, instrument};

use crate::errors::AppError;
use crate::models::{CreateOrderResponse, NewOrder, Order, UpdateStatusRequest};
use crate::state::AppState;

pub const STATUS_UPDATED_MESSAGE: &str = "Status Successfully Updated";

#[instrument(
  name = "handler::create_order",
  skip(app_state, req_payload),
  fields(order_id = %req_payload.id)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewOrder>,
) -> Result<HttpResponse, AppError> {
  let new_order = req_payload.into_inner();
  new_order.validate()?;

  let order_id = new_order.id.clone();
  let row = new_order.into_row()?;
  app_state.store.insert(row).await?;

  info!("Order {} created.", order_id);
  Ok(HttpResponse::Ok().json(CreateOrderResponse { id: order_id }))
}

// Unknown ids are not an error: the update simply touches zero rows.
#[instrument(
  name = "handler::update_order",
  skip(app_state, path, req_payload),
  fields(order_id = %path.as_ref(), status = %req_payload.status)
)]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let UpdateStatusRequest { status } = req_payload.into_inner();

  let rows_affected = app_state.store.update_status(&order_id, &status).await?;
  debug!(rows_affected, "Status update for order {} applied.", order_id);

  Ok(
    HttpResponse::Ok()
      .content_type(ContentType::plaintext())
      .body(STATUS_UPDATED_MESSAGE),
  )
}

/// Returns every stored order. Query parameters are ignored; there is no filtering or paging.
/// One undecodable row fails the whole response.
#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let rows = app_state.store.fetch_all().await?;

  let orders = rows.into_iter().map(Order::try_from).collect::<Result<Vec<_>, _>>()?;

  info!("Listing {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}
