//! HTTP transport for the book service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` — welcome message.
//! - `GET /list-books` — `{ "books": [...] }`, the full collection.
//! - `GET /book-by-index/:index` — `{ "book": ... }`, 404 past the end.
//! - `GET /get-random-book` — one record wrapped in a single-element array.
//! - `POST /add-books` — validate and insert; 422 on schema violation.
//! - `GET /get-book?book_id=...` — lookup by identifier, 404 when absent.
//! - `GET /health` — health check returning `{ "ok": true }`.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::Book;
use crate::http::{health_handler, ApiError};
use crate::record::Record;
use crate::store::Store;

/// Build an axum `Router` over the given book store.
pub fn router(store: Store<Book>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_handler))
        .route("/list-books", get(list_books))
        .route("/book-by-index/:index", get(book_by_index))
        .route("/get-random-book", get(get_random_book))
        .route("/add-books", post(add_books))
        .route("/get-book", get(get_book))
        .with_state(store)
}

/// Serve the book service at the given address (e.g. `"0.0.0.0:8000"`).
pub async fn serve(store: Store<Book>, addr: &str) -> Result<(), std::io::Error> {
    crate::http::serve(router(store), addr).await
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to My Book Store" }))
}

async fn list_books(State(store): State<Store<Book>>) -> Result<Json<Value>, ApiError> {
    let books = store.list()?;
    Ok(Json(json!({ "books": books })))
}

async fn book_by_index(
    State(store): State<Store<Book>>,
    Path(index): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let book = store.get_by_index(index)?;
    Ok(Json(json!({ "book": book })))
}

/// The single record comes back wrapped in a one-element array.
async fn get_random_book(State(store): State<Store<Book>>) -> Result<Json<Vec<Book>>, ApiError> {
    let book = store.get_random()?;
    Ok(Json(vec![book]))
}

async fn add_books(
    State(store): State<Store<Book>>,
    Json(input): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let book = Book::validate(&input)?;
    let stored = store.insert(book)?;
    info!(book_id = %stored.book_id, name = %stored.name, "book added");
    Ok(Json(json!({
        "message": format!("book {} successfully added", stored.name),
        "book_id": stored.book_id,
    })))
}

#[derive(Deserialize)]
struct GetBookParams {
    book_id: String,
}

async fn get_book(
    State(store): State<Store<Book>>,
    Query(params): Query<GetBookParams>,
) -> Result<Json<Book>, ApiError> {
    let book = store.get_by_id(&params.book_id)?;
    Ok(Json(book))
}
