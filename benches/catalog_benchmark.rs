use catalog_service::{Book, Catalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_large_catalog() -> Catalog {
    let categories = ["Programming", "Fiction", "History", "Science"];

    let books = (0..2000).map(|i| {
        Book::new(
            format!("978-{:010}", i),
            format!("Test Book {}", i),
            format!("Test Author {}", i % 50),
            categories[i % categories.len()],
            10.0 + (i % 90) as f64,
            (i % 200) as u32,
        )
    });

    Catalog::new(books).unwrap()
}

fn benchmark_search_sample(c: &mut Criterion) {
    let catalog = Catalog::with_sample_data().unwrap();

    c.bench_function("search_sample", |b| {
        b.iter(|| catalog.search_books(black_box(Some("effective")), black_box(None)))
    });
}

fn benchmark_search_large(c: &mut Criterion) {
    let catalog = create_large_catalog();

    c.bench_function("search_large_query", |b| {
        b.iter(|| catalog.search_books(black_box(Some("author 25")), black_box(None)))
    });

    c.bench_function("search_large_with_category", |b| {
        b.iter(|| catalog.search_books(black_box(Some("book")), black_box(Some("fiction"))))
    });
}

fn benchmark_lookups(c: &mut Criterion) {
    let catalog = create_large_catalog();

    c.bench_function("get_book_by_id", |b| {
        b.iter(|| catalog.get_book_by_id(black_box("978-0000001342")))
    });

    c.bench_function("get_book_price", |b| {
        b.iter(|| catalog.get_book_price(black_box("978-0000001342")))
    });

    c.bench_function("check_availability", |b| {
        b.iter(|| catalog.check_availability(black_box("978-0000001342"), black_box(10)))
    });
}

criterion_group!(
    benches,
    benchmark_search_sample,
    benchmark_search_large,
    benchmark_lookups
);
criterion_main!(benches);
