//! Book catalog: the full set of tracked book records.
//!
//! The catalog owns data and enforces nothing beyond id uniqueness. Iteration
//! order is stable (first insertion wins the position) so that ranking ties
//! and favorite-genre ties resolve the same way on every call.

mod search;
mod views;

pub use search::{books_in_genre, genres, search_books};
pub use views::{checked_out, currently_reading, finished, overdue, want_to_read};

use crate::models::Book;
use std::collections::HashMap;

/// In-memory book store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records. Later duplicates replace earlier ones.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut catalog = Self::new();
        for book in books {
            catalog.upsert(book);
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.positions.get(id).and_then(|&idx| self.books.get(idx))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Book> {
        match self.positions.get(id) {
            Some(&idx) => self.books.get_mut(idx),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// All books in catalog order.
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Book> {
        self.books.iter_mut()
    }

    /// Insert or replace a book (last write wins, position is kept).
    ///
    /// Returns the replaced record, if any.
    pub fn upsert(&mut self, book: Book) -> Option<Book> {
        match self.positions.get(&book.id) {
            Some(&idx) => self
                .books
                .get_mut(idx)
                .map(|slot| std::mem::replace(slot, book)),
            None => {
                self.positions.insert(book.id.clone(), self.books.len());
                self.books.push(book);
                None
            }
        }
    }

    /// Remove a book by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Book> {
        let idx = self.positions.remove(id)?;
        let removed = self.books.remove(idx);
        for position in self.positions.values_mut() {
            if *position > idx {
                *position -= 1;
            }
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
