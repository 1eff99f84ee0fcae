//! In-memory book catalog with search, lookup, price and stock queries,
//! served as JSON over HTTP.

use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use error::{CatalogError, ServiceError};
pub use models::book::Book;
pub use models::catalog::Catalog;

use routes::{
    catalog::{check_availability, get_book, get_book_price, search_books},
    health::{catalog_status, health_check},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            loaded_at: Utc::now(),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/catalog/status", get(catalog_status))
        .route("/books", get(search_books))
        .route("/books/:book_id", get(get_book))
        .route("/books/:book_id/price", get(get_book_price))
        .route("/books/:book_id/availability", get(check_availability))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
