use crate::models::book::Book;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogStatusResponse {
    pub books: usize,
    pub categories: Vec<String>,
    pub loaded_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: Option<String>,
    pub category: Option<String>,
    pub count: usize,
    pub results: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponse {
    pub book_id: String,
    pub price: f64,
    pub found: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub book_id: String,
    pub quantity: i64,
    pub available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
