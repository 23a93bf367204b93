//! Text search and genre filtering over the catalog.

use crate::config::CatalogConfig;
use crate::models::Book;
use std::collections::BTreeSet;

/// Case-insensitive substring search across title, authors and publisher.
///
/// An empty query returns every book.
pub fn search_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    if query.is_empty() {
        return books.iter().collect();
    }
    let needle = query.to_lowercase();
    books.iter().filter(|book| book.matches_text(&needle)).collect()
}

/// Books whose category list contains `genre`. The "All" sentinel matches
/// every book.
pub fn books_in_genre<'a>(books: &'a [Book], genre: &str) -> Vec<&'a Book> {
    if genre == CatalogConfig::ALL_GENRES {
        return books.iter().collect();
    }
    books
        .iter()
        .filter(|book| book.categories.iter().any(|c| c == genre))
        .collect()
}

/// "All" followed by the sorted set of distinct categories.
pub fn genres(books: &[Book]) -> Vec<String> {
    let distinct: BTreeSet<&str> = books
        .iter()
        .flat_map(|book| book.categories.iter().map(String::as_str))
        .collect();

    std::iter::once(CatalogConfig::ALL_GENRES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}
