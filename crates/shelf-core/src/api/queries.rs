//! Read-only queries.
//!
//! Loan views take `&mut self` because they run the overdue sweep first.

use crate::catalog;
use crate::error::Result;
use crate::models::{AppSettings, Book, ReadingGoal, UserStats};
use crate::{recommend, Library};

impl Library {
    /// Full catalog in catalog order.
    pub fn books(&self) -> &[Book] {
        self.catalog.all()
    }

    pub fn book(&self, book_id: &str) -> Result<&Book> {
        self.find(book_id)
    }

    /// Case-insensitive match on title, author or publisher.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        catalog::search_books(self.catalog.all(), query)
    }

    pub fn books_in_genre(&self, genre: &str) -> Vec<&Book> {
        catalog::books_in_genre(self.catalog.all(), genre)
    }

    /// "All" followed by every category in the catalog, sorted.
    pub fn genres(&self) -> Vec<String> {
        catalog::genres(self.catalog.all())
    }

    pub fn currently_reading(&self) -> Vec<&Book> {
        catalog::currently_reading(self.catalog.all())
    }

    pub fn want_to_read(&self) -> Vec<&Book> {
        catalog::want_to_read(self.catalog.all())
    }

    pub fn finished_books(&self) -> Vec<&Book> {
        catalog::finished(self.catalog.all())
    }

    /// Books on loan, overdue ones included.
    pub fn checked_out_books(&mut self) -> Vec<&Book> {
        self.refresh_overdue();
        catalog::checked_out(self.catalog.all())
    }

    pub fn overdue_books(&mut self) -> Vec<&Book> {
        self.refresh_overdue();
        catalog::overdue(self.catalog.all())
    }

    pub fn reading_goal(&self) -> &ReadingGoal {
        &self.reading_goal
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Newest first.
    pub fn recently_viewed(&self) -> Vec<&Book> {
        self.books_by_ids(self.recently_viewed.iter())
    }

    pub fn home_recommendations(&self) -> Vec<&Book> {
        self.books_by_ids(self.home_recs.iter().map(String::as_str))
    }

    /// Related books for the most recently viewed book.
    pub fn related_recommendations(&self) -> Vec<&Book> {
        match &self.related {
            Some((_, ids)) => self.books_by_ids(ids.iter().map(String::as_str)),
            None => Vec::new(),
        }
    }

    /// Related books for any book, computed on the spot.
    pub fn related_to(&self, book_id: &str) -> Result<Vec<&Book>> {
        let focal = self.find(book_id)?;
        Ok(recommend::related_recommendations(self.catalog.all(), focal))
    }
}
