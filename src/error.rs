use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate book id: {0}")]
    DuplicateId(String),
    #[error("Invalid price {price} for book {id}")]
    InvalidPrice { id: String, price: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
