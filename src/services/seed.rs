use crate::error::CatalogError;
use crate::models::book::Book;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new(
            "978-0134685991",
            "Effective Java",
            "Joshua Bloch",
            "Programming",
            45.99,
            100,
        ),
        Book::new(
            "978-0596007126",
            "Head First Design Patterns",
            "Eric Freeman",
            "Programming",
            39.99,
            75,
        ),
        Book::new(
            "978-0321356680",
            "Effective C++",
            "Scott Meyers",
            "Programming",
            42.99,
            50,
        ),
    ]
}

/// Reads a JSON array of books. Validation happens in `Catalog::new`.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Book>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let books: Vec<Book> = serde_json::from_str(&content)?;

    info!("Loaded {} books from {}", books.len(), path.display());

    Ok(books)
}
