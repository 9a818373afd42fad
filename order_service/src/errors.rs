// order_service/src/errors.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Request body could not be decoded as the expected JSON shape.
  #[error("Malformed request body: {0}")]
  MalformedBody(String),

  /// Body decoded but failed the create-order field checks.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Order store error: {0}")]
  Store(#[from] StoreError),

  /// A stored row could not be turned back into an order.
  #[error("Failed to decode stored order '{order_id}': {reason}")]
  RowDecode { order_id: String, reason: String },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn row_decode(order_id: impl Into<String>, reason: impl ToString) -> Self {
    AppError::RowDecode {
      order_id: order_id.into(),
      reason: reason.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::MalformedBody(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) | AppError::Store(_) | AppError::RowDecode { .. } | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  // Clients only ever see the reason phrase; the cause stays in the logs.
  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with internal error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }
    HttpResponse::build(status)
      .content_type(ContentType::plaintext())
      .body(status.canonical_reason().unwrap_or_default())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
