//! HTTP transport for the item service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` — welcome message.
//! - `POST /items` — validate and insert; returns the full updated
//!   collection; 422 on schema violation.
//! - `GET /items/:item_id` — the record at that index, 404 past the end.
//! - `GET /items?limit=N` — the first N records, `limit` defaults to 10.
//! - `GET /health` — health check returning `{ "ok": true }`.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::Item;
use crate::http::{health_handler, ApiError};
use crate::record::Record;
use crate::store::Store;

/// Build an axum `Router` over the given item store.
pub fn router(store: Store<Item>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_handler))
        .route("/items", get(list_items).post(create_item))
        .route("/items/:item_id", get(get_item))
        .with_state(store)
}

/// Serve the item service at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve(store: Store<Item>, addr: &str) -> Result<(), std::io::Error> {
    crate::http::serve(router(store), addr).await
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

/// Returns the full updated collection after the insert.
async fn create_item(
    State(store): State<Store<Item>>,
    Json(input): Json<Value>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let item = Item::validate(&input)?;
    store.insert(item)?;
    Ok(Json(store.list()?))
}

async fn get_item(
    State(store): State<Store<Item>>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(store.get_by_index(item_id)?))
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    10
}

async fn list_items(
    State(store): State<Store<Item>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = store.list()?;
    Ok(Json(items.into_iter().take(params.limit).collect()))
}
