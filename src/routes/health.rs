use crate::models::responses::{CatalogStatusResponse, HealthResponse};
use crate::AppState;
use axum::{extract::State, response::Json};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "catalog-service".to_string(),
        status: "running".to_string(),
    })
}

pub async fn catalog_status(State(state): State<AppState>) -> Json<CatalogStatusResponse> {
    Json(CatalogStatusResponse {
        books: state.catalog.len(),
        categories: state.catalog.categories(),
        loaded_at: state.loaded_at.to_rfc3339(),
    })
}
