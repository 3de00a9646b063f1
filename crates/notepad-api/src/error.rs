//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Clients only ever see a generic `{"error": "..."}` body. Underlying causes
//! stay in the server log.

use axum::{
  Json,
  extract::rejection::{BytesRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request body could not be decoded as a note.
  #[error("invalid request payload: {0}")]
  InvalidPayload(#[from] serde_json::Error),

  /// The request body could not be read at all.
  #[error("unreadable request body: {0}")]
  UnreadableBody(#[from] BytesRejection),

  /// The id segment after `/notes/` is missing or not an integer.
  #[error("invalid note id: {0}")]
  InvalidId(String),

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("no route for {0}")]
  UnknownRoute(String),

  #[error(transparent)]
  Repository(#[from] notepad_core::Error),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::InvalidPayload(_)
      | ApiError::UnreadableBody(_)
      | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::UnknownRoute(_) => StatusCode::NOT_FOUND,
      ApiError::Repository(e) if e.is_not_found() => StatusCode::NOT_FOUND,
      ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// The message placed in the response body.
  fn public_message(&self) -> &'static str {
    match self {
      ApiError::InvalidPayload(_) | ApiError::UnreadableBody(_) => "invalid request payload",
      ApiError::InvalidId(_) => "invalid note id",
      ApiError::MethodNotAllowed => "method not allowed",
      ApiError::UnknownRoute(_) => "not found",
      ApiError::Repository(e) if e.is_not_found() => "note not found",
      ApiError::Repository(_) => "internal server error",
    }
  }
}

impl From<PathRejection> for ApiError {
  fn from(e: PathRejection) -> Self { ApiError::InvalidId(e.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::debug!(error = %self, %status, "request rejected");
    }
    (status, Json(json!({ "error": self.public_message() }))).into_response()
  }
}
