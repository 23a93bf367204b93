//! Shelf Core - headless library state manager for ShelfAI.
//!
//! Tracks a user's book collection, the lending lifecycle of each book
//! (borrow, return, renew, reserve, overdue), reading progress against a
//! reading goal, and rule-based recommendations. Everything runs in memory on
//! the calling thread; persistence and metadata fetch belong to the host.
//!
//! # Example
//!
//! ```rust
//! use shelf_core::Library;
//!
//! fn main() -> shelf_core::Result<()> {
//!     let mut library = Library::builder().with_sample_catalog(true).build()?;
//!
//!     let hobbit = library.borrow("5")?;
//!     println!("{} is {}", hobbit.title, hobbit.status.display_name());
//!
//!     let update = library.update_progress("3", 1.0)?;
//!     println!("goal: {}/{}", update.reading_goal.current, update.reading_goal.target);
//!
//!     for book in library.home_recommendations() {
//!         println!("try {} ({:.1})", book.title, book.rating());
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod lending;
pub mod models;
pub mod progress;
pub mod recent;
pub mod recommend;
pub mod sample;

mod api;

pub use api::{LibraryBuilder, SharedLibrary};
pub use catalog::Catalog;
pub use error::{ErrorKind, Result, ShelfError};
pub use lending::{LendingOp, TransitionOutcome};
pub use models::{
    AppSettings, Book, BookView, ColorScheme, LendingStatus, LibrarySnapshot, NewBook,
    ProgressUpdate, ReadingGoal, TimeFrame, UserStats,
};
pub use recent::RecentlyViewed;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

/// Source of the current time. Every "now" inside the facade goes through it.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The system clock.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Single entry point for catalog queries and mutations.
///
/// Every command locates its book, mutates it through the owning component,
/// then recomputes dependent state before returning:
/// - stats after every catalog change
/// - home recommendations after library-membership changes
/// - related recommendations after membership changes and book views
///
/// A command that returns an error leaves all state untouched.
pub struct Library {
    catalog: Catalog,
    reading_goal: ReadingGoal,
    settings: AppSettings,
    stats: UserStats,
    recently_viewed: RecentlyViewed,
    /// Cached ids, best first.
    home_recs: Vec<String>,
    /// Focal book id of the last view and its related ids.
    related: Option<(String, Vec<String>)>,
    clock: Clock,
}

impl Library {
    /// An empty library with default settings and goal.
    pub fn new() -> Self {
        Self::from_parts(
            Catalog::new(),
            ReadingGoal::default(),
            AppSettings::default(),
            UserStats::default(),
            RecentlyViewed::new(),
            system_clock(),
        )
    }

    /// Create a builder for `Library`.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    pub(crate) fn from_parts(
        catalog: Catalog,
        reading_goal: ReadingGoal,
        settings: AppSettings,
        stats: UserStats,
        recently_viewed: RecentlyViewed,
        clock: Clock,
    ) -> Self {
        let mut library = Self {
            catalog,
            reading_goal,
            settings,
            stats,
            recently_viewed,
            home_recs: Vec::new(),
            related: None,
            clock,
        };
        library.refresh_stats();
        library.refresh_recommendations();
        library
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub(crate) fn find(&self, book_id: &str) -> Result<&Book> {
        self.catalog.get(book_id).ok_or_else(|| unknown_book(book_id))
    }

    pub(crate) fn find_mut(&mut self, book_id: &str) -> Result<&mut Book> {
        self.catalog
            .get_mut(book_id)
            .ok_or_else(|| unknown_book(book_id))
    }

    /// Clone of a book known to exist, for returning snapshots after a command.
    pub(crate) fn snapshot_of(&self, book_id: &str) -> Result<Book> {
        self.find(book_id).cloned()
    }

    pub(crate) fn refresh_stats(&mut self) {
        self.stats = progress::recompute_stats(self.catalog.all(), &self.stats);
    }

    /// Recompute home recommendations and the related list of the current
    /// focal book (dropped if that book is gone).
    pub(crate) fn refresh_recommendations(&mut self) {
        self.home_recs = ids_of(recommend::home_recommendations(self.catalog.all()));
        if let Some((focal_id, _)) = self.related.take() {
            self.refresh_related(&focal_id);
        }
    }

    pub(crate) fn refresh_related(&mut self, focal_id: &str) {
        self.related = self.catalog.get(focal_id).map(|focal| {
            let related = recommend::related_recommendations(self.catalog.all(), focal);
            (focal_id.to_string(), ids_of(related))
        });
    }

    pub(crate) fn books_by_ids<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Vec<&'a Book> {
        ids.into_iter().filter_map(|id| self.catalog.get(id)).collect()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.catalog.len())
            .field("reading_goal", &self.reading_goal)
            .field("settings", &self.settings)
            .field("stats", &self.stats)
            .field("recently_viewed", &self.recently_viewed)
            .finish_non_exhaustive()
    }
}

pub(crate) fn unknown_book(book_id: &str) -> ShelfError {
    warn!("Unknown book id: {}", book_id);
    ShelfError::not_found(book_id)
}

fn ids_of(books: Vec<&Book>) -> Vec<String> {
    books.into_iter().map(|b| b.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_library_is_empty() {
        let library = Library::new();
        assert!(library.books().is_empty());
        assert_eq!(library.reading_goal(), &ReadingGoal::default());
        assert_eq!(library.settings(), &AppSettings::default());
        assert_eq!(library.stats().favorite_genre, "None");
        assert!(library.home_recommendations().is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut library = Library::new();
        let err = library.borrow("missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(library.book("missing").is_err());
    }

    #[test]
    fn test_debug_summarizes() {
        let library = Library::new();
        let debug = format!("{:?}", library);
        assert!(debug.contains("books: 0"));
    }
}
