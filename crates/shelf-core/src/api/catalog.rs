//! Catalog membership, annotation and view commands.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Result, ShelfError};
use crate::models::{Book, BookView, LibrarySnapshot, NewBook};
use crate::{progress, unknown_book, Library};

impl Library {
    /// Add a book entered by hand. It gets a fresh id and lands in the library.
    pub fn add_manual_book(&mut self, new_book: NewBook) -> Result<Book> {
        validate_new_book(&new_book)?;

        let now = self.now();
        let id = Uuid::new_v4().to_string();
        let mut book = Book::new(id.clone(), new_book.title.trim(), new_book.authors, now);
        book.page_count = new_book.page_count;
        book.categories = new_book.categories;
        book.cover_id = new_book.cover_id;
        book.is_in_library = true;

        self.catalog.upsert(book);
        info!("Added book {} to the library", id);
        self.after_membership_change();
        self.snapshot_of(&id)
    }

    /// Insert or replace a catalog record as-is (e.g. fetched metadata).
    ///
    /// Returns the record it replaced.
    pub fn upsert_book(&mut self, book: Book) -> Result<Option<Book>> {
        progress::validate_book(&book)?;
        let replaced = self.catalog.upsert(book);
        self.after_membership_change();
        Ok(replaced)
    }

    /// Drop a book from the catalog, the recently-viewed list and any
    /// recommendation list.
    pub fn remove_book(&mut self, book_id: &str) -> Result<Book> {
        let removed = self
            .catalog
            .remove(book_id)
            .ok_or_else(|| unknown_book(book_id))?;
        self.recently_viewed.remove(book_id);
        info!("Removed book {}", book_id);
        self.after_membership_change();
        Ok(removed)
    }

    /// Add a book to, or take it out of, the user's library.
    pub fn toggle_library_membership(&mut self, book_id: &str) -> Result<Book> {
        let now = self.now();
        let book = self.find_mut(book_id)?;
        book.is_in_library = !book.is_in_library;
        if book.is_in_library {
            book.date_added = now;
        }
        debug!("Book {} in library: {}", book_id, book.is_in_library);
        self.after_membership_change();
        self.snapshot_of(book_id)
    }

    pub fn update_notes(&mut self, book_id: &str, notes: impl Into<String>) -> Result<Book> {
        self.find_mut(book_id)?.notes = notes.into();
        self.refresh_stats();
        self.snapshot_of(book_id)
    }

    /// Set or clear the user's 1-5 rating.
    pub fn update_user_rating(&mut self, book_id: &str, rating: Option<u8>) -> Result<Book> {
        if let Some(value) = rating {
            progress::validate_user_rating(value)?;
        }
        self.find_mut(book_id)?.user_rating = rating;
        self.refresh_stats();
        self.snapshot_of(book_id)
    }

    /// Record a view of a book and make it the focal book for related
    /// recommendations.
    pub fn add_to_recently_viewed(&mut self, book_id: &str) -> Result<BookView> {
        self.find(book_id)?;
        if self.recently_viewed.record(book_id) {
            debug!("Book {} added to recently viewed", book_id);
        }
        self.refresh_related(book_id);

        Ok(BookView {
            book: self.snapshot_of(book_id)?,
            recently_viewed: self.recently_viewed().into_iter().cloned().collect(),
            related: self.related_recommendations().into_iter().cloned().collect(),
        })
    }

    /// Everything the host needs to persist and later restore this library.
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            books: self.catalog.all().to_vec(),
            reading_goal: self.reading_goal,
            settings: self.settings.clone(),
            user_stats: self.stats.clone(),
            recently_viewed: self.recently_viewed.to_vec(),
        }
    }

    fn after_membership_change(&mut self) {
        self.refresh_stats();
        self.refresh_recommendations();
    }
}

fn validate_new_book(new_book: &NewBook) -> Result<()> {
    if new_book.title.trim().is_empty() {
        return Err(ShelfError::validation("title", "Title must not be empty"));
    }
    if !new_book.authors.iter().any(|a| !a.trim().is_empty()) {
        return Err(ShelfError::validation("authors", "At least one author is required"));
    }
    if !new_book.categories.iter().any(|c| !c.trim().is_empty()) {
        return Err(ShelfError::validation("categories", "At least one genre is required"));
    }
    Ok(())
}
