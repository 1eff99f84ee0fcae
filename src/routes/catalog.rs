use crate::models::book::Book;
use crate::models::responses::{
    AvailabilityResponse, ErrorResponse, PriceResponse, SearchResponse,
};
use crate::utils::text::normalize_filter;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub quantity: Option<i64>,
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

pub async fn search_books(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Json<SearchResponse> {
    info!("Search query: {:?}", params);

    let query = normalize_filter(params.q.as_deref()).map(str::to_string);
    let category = normalize_filter(params.category.as_deref()).map(str::to_string);

    let results = state
        .catalog
        .search_books(query.as_deref(), category.as_deref());

    debug!("Search matched {} books", results.len());

    Json(SearchResponse {
        query,
        category,
        count: results.len(),
        results,
    })
}

pub async fn get_book(
    Path(book_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Book>, Response> {
    match state.catalog.get_book_by_id(&book_id) {
        Some(book) => Ok(Json(book.clone())),
        None => {
            debug!("Book {} not found", book_id);
            Err(json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("book {} not found", book_id),
            ))
        }
    }
}

pub async fn get_book_price(
    Path(book_id): Path<String>,
    State(state): State<AppState>,
) -> Json<PriceResponse> {
    let found = state.catalog.get_book_by_id(&book_id).is_some();
    let price = state.catalog.get_book_price(&book_id);

    Json(PriceResponse {
        book_id,
        price,
        found,
    })
}

pub async fn check_availability(
    Path(book_id): Path<String>,
    Query(params): Query<AvailabilityParams>,
    State(state): State<AppState>,
) -> Json<AvailabilityResponse> {
    let quantity = params.quantity.unwrap_or(1);
    let available = state.catalog.check_availability(&book_id, quantity);

    info!(
        "Availability of {} for quantity {}: {}",
        book_id, quantity, available
    );

    Json(AvailabilityResponse {
        book_id,
        quantity,
        available,
    })
}
