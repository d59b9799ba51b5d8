use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use folio_http::extract::ApiJson;

use super::catalog::Catalog;
use super::models::Book;

/// Routes for the books module, relative to its mount point.
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(list_books).post(add_book))
        .with_state(catalog)
}

/// List every book in insertion order
async fn list_books(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Book>> {
    Json(catalog.list().await)
}

/// Append the request body to the catalog and echo it back
async fn add_book(
    State(catalog): State<Arc<Catalog>>,
    ApiJson(book): ApiJson<Book>,
) -> Json<Book> {
    Json(catalog.add(book).await)
}
