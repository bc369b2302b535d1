//! Shared HTTP plumbing for the two services.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! Store errors become `(status, {"error": ...})` responses through
//! `ApiError`, so handlers stay on `?` instead of matching per route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::error::{StoreError, ValidationError};

/// Wrapper turning a `StoreError` into an axum response.
pub struct ApiError(pub StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(StoreError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// `GET /health` — returns `{ "ok": true }`.
pub(crate) async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// Serve a router over HTTP at the given address (e.g. `"0.0.0.0:8000"`).
pub async fn serve(app: Router, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await
}
