//! Builder for configuring Library initialization.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Result, ShelfError};
use crate::models::{AppSettings, Book, LibrarySnapshot, ReadingGoal, UserStats};
use crate::recent::RecentlyViewed;
use crate::{lending, progress, sample, system_clock, Clock, Library};

/// Builder for configuring Library initialization.
///
/// # Example
///
/// ```rust
/// use shelf_core::{Library, ReadingGoal, TimeFrame};
///
/// let library = Library::builder()
///     .with_sample_catalog(true)
///     .with_reading_goal(ReadingGoal::new(24, TimeFrame::Yearly))
///     .build()
///     .unwrap();
/// assert_eq!(library.books().len(), 10);
/// ```
pub struct LibraryBuilder {
    sample_catalog: bool,
    books: Vec<Book>,
    settings: AppSettings,
    reading_goal: ReadingGoal,
    user_stats: UserStats,
    recently_viewed: Vec<String>,
    clock: Option<Clock>,
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self {
            sample_catalog: false,
            books: Vec::new(),
            settings: AppSettings::default(),
            reading_goal: ReadingGoal::default(),
            user_stats: UserStats::default(),
            recently_viewed: Vec::new(),
            clock: None,
        }
    }

    /// Start from a snapshot previously produced by [`Library::snapshot`].
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self {
            sample_catalog: false,
            books: snapshot.books,
            settings: snapshot.settings,
            reading_goal: snapshot.reading_goal,
            user_stats: snapshot.user_stats,
            recently_viewed: snapshot.recently_viewed,
            clock: None,
        }
    }

    /// Seed the catalog with the ten demo books.
    ///
    /// Books passed to [`with_books`](Self::with_books) are added after the
    /// demo books and replace them on id clashes.
    ///
    /// Default: `false`
    pub fn with_sample_catalog(mut self, enable: bool) -> Self {
        self.sample_catalog = enable;
        self
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Default: 10 books, monthly.
    pub fn with_reading_goal(mut self, goal: ReadingGoal) -> Self {
        self.reading_goal = goal;
        self
    }

    /// Carry streak and last-reading state over from a previous session.
    pub fn with_user_stats(mut self, stats: UserStats) -> Self {
        self.user_stats = stats;
        self
    }

    /// Replace the system clock, mainly for tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.reading_goal.target < 1 {
            return Err(ShelfError::Config {
                message: "Reading goal target must be at least 1".to_string(),
            });
        }
        self.settings.validate()?;
        for book in &self.books {
            progress::validate_book(book)?;
        }
        Ok(())
    }

    /// Build the Library instance.
    ///
    /// Runs the overdue sweep, derives stats and performs the once-per-session
    /// streak check.
    pub fn build(self) -> Result<Library> {
        self.validate()?;

        let clock = self.clock.unwrap_or_else(system_clock);
        let now = clock();

        let mut catalog = Catalog::new();
        if self.sample_catalog {
            let seeded = sample::sample_books(now);
            info!("Seeding catalog with {} sample books", seeded.len());
            for book in seeded {
                catalog.upsert(book);
            }
        }
        for book in self.books {
            if let Some(previous) = catalog.upsert(book) {
                debug!("Replaced book {} while building catalog", previous.id);
            }
        }

        let overdue = lending::recompute_overdue(catalog.iter_mut(), now);
        if overdue > 0 {
            info!("{} books became overdue since last session", overdue);
        }

        let recently_viewed = RecentlyViewed::from_ids(
            self.recently_viewed
                .into_iter()
                .filter(|id| catalog.contains(id)),
        );

        let mut stats = progress::recompute_stats(catalog.all(), &self.user_stats);
        let change = progress::check_streak(&mut stats, now);
        info!(
            "Reading streak check: {:?}, streak is {} days",
            change, stats.reading_streak
        );

        let library = Library::from_parts(
            catalog,
            self.reading_goal,
            self.settings,
            stats,
            recently_viewed,
            clock,
        );
        info!(
            "Library ready with {} books (goal {}/{} {})",
            library.books().len(),
            library.reading_goal().current,
            library.reading_goal().target,
            library.reading_goal().time_frame.display_name(),
        );
        Ok(library)
    }
}
