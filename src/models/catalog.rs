use crate::error::CatalogError;
use crate::models::book::Book;
use crate::services::seed::sample_books;
use crate::utils::text::{contains_ignore_case, eq_ignore_case, normalize_filter};
use std::collections::{BTreeSet, HashMap};

/// Read-only book catalog, built once at startup and shared across requests.
///
/// Nothing here mutates after construction, so concurrent readers need no
/// locking. Adding writes later means either an `RwLock` around `books` or
/// swapping a whole new `Catalog` behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: HashMap<String, Book>,
}

impl Catalog {
    pub fn new(seed: impl IntoIterator<Item = Book>) -> Result<Self, CatalogError> {
        let mut books = HashMap::new();

        for book in seed {
            if !book.price.is_finite() || book.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: book.id,
                    price: book.price,
                });
            }
            if books.contains_key(&book.id) {
                return Err(CatalogError::DuplicateId(book.id));
            }
            books.insert(book.id.clone(), book);
        }

        Ok(Self { books })
    }

    pub fn with_sample_data() -> Result<Self, CatalogError> {
        Self::new(sample_books())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Distinct categories as stored, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.books
            .values()
            .map(|book| book.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Books whose title or author contains `query` and whose category equals
    /// `category`, both case-insensitively. Absent or empty filters match
    /// everything. Results are sorted by id.
    pub fn search_books(&self, query: Option<&str>, category: Option<&str>) -> Vec<Book> {
        let query = normalize_filter(query);
        let category = normalize_filter(category);

        let mut results: Vec<Book> = self
            .books
            .values()
            .filter(|book| {
                query.map_or(true, |q| {
                    contains_ignore_case(&book.title, q) || contains_ignore_case(&book.author, q)
                })
            })
            .filter(|book| category.map_or(true, |c| eq_ignore_case(&book.category, c)))
            .cloned()
            .collect();

        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }

    pub fn get_book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn price_of(&self, id: &str) -> Option<f64> {
        self.books.get(id).map(|book| book.price)
    }

    /// Price of the book, or `0.0` when the id is unknown.
    pub fn get_book_price(&self, id: &str) -> f64 {
        self.price_of(id).unwrap_or(0.0)
    }

    /// True when the book exists and has at least `quantity` in stock.
    /// Non-positive quantities are always satisfied for a known book.
    pub fn check_availability(&self, id: &str, quantity: i64) -> bool {
        self.books
            .get(id)
            .map_or(false, |book| i64::from(book.stock) >= quantity)
    }
}
