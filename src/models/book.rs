use serde::{Deserialize, Serialize};

/// A single catalog entry. Fields are kept exactly as seeded; matching
/// normalizes case on the fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            price,
            stock,
        }
    }
}
