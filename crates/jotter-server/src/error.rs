//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a request handler. Every variant renders as a JSON
/// `{"error": "..."}` body.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("invalid username or password")]
  Unauthorized,

  #[error("conflict: {0}")]
  Conflict(String),

  /// Details are logged, not sent to the client.
  #[error("{0}")]
  Internal(&'static str),
}

impl From<jotter_core::Error> for ApiError {
  fn from(err: jotter_core::Error) -> Self {
    use jotter_core::Error as E;
    match err {
      E::BadRequest(msg) => ApiError::BadRequest(msg),
      E::Unauthorized | E::UserNotFound(_) => ApiError::Unauthorized,
      E::DuplicateUsername(name) => {
        ApiError::Conflict(format!("username {name:?} is already taken"))
      }
      E::CorrectionService(detail) => {
        tracing::error!(%detail, "spell-check failed");
        ApiError::Internal("note could not be spell-checked")
      }
      e @ (E::Hashing(_) | E::Store(_)) => {
        tracing::error!(error = %e, "internal error");
        ApiError::Internal("internal server error")
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match self {
      ApiError::BadRequest(m) | ApiError::Conflict(m) => m,
      other => other.to_string(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
