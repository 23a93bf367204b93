//! UniFFI bindings for shelf-core.
//!
//! Exposes the `Library` facade to the Swift presentation layer (and any
//! other UniFFI target) as a single `FfiLibrary` object. Core types are
//! mirrored as FFI records so the core crate carries no binding attributes.
//! Timestamps cross the boundary as Unix seconds.
//!
//! # Usage
//!
//! ```bash
//! # Build the cdylib
//! cargo build -p shelf-uniffi --release
//!
//! # Generate Swift bindings
//! shelf-uniffi-bindgen generate --library --language swift \
//!     --out-dir ./bindings/swift target/release/libshelf_uniffi.dylib
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shelf_core::{
    AppSettings, Book, BookView, ColorScheme, LendingStatus, Library, LibraryBuilder,
    LibrarySnapshot, NewBook, ProgressUpdate, ReadingGoal, SharedLibrary, ShelfError, TimeFrame,
    UserStats,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// FFI-friendly error type.
///
/// Flattened version of `ShelfError`; sources and numeric details are folded
/// into the message.
#[derive(Debug, Clone, uniffi::Error, thiserror::Error)]
pub enum FfiError {
    #[error("Book not found: {book_id}")]
    NotFound { book_id: String },

    #[error("{message}")]
    InvalidTransition { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{message}")]
    OutOfRange { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl From<ShelfError> for FfiError {
    fn from(err: ShelfError) -> Self {
        let message = err.to_string();
        match err {
            ShelfError::BookNotFound { book_id } => FfiError::NotFound { book_id },
            ShelfError::InvalidTransition { .. } => FfiError::InvalidTransition { message },
            ShelfError::Config { message } => FfiError::Config { message },
            ShelfError::OutOfRange { .. } => FfiError::OutOfRange { message },
            ShelfError::Validation { .. } => FfiError::Validation { message },
            ShelfError::Json { .. } | ShelfError::LockPoisoned => FfiError::Internal { message },
        }
    }
}

/// Result type for FFI operations.
pub type FfiResult<T> = Result<T, FfiError>;

// UniFFI scaffolding - this generates the FFI glue code
uniffi::setup_scaffolding!();

/// Get the version of the shelf-uniffi bindings.
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a compact stderr logger for the core's tracing output.
///
/// Safe to call more than once; only the first call installs a subscriber.
#[uniffi::export]
pub fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let installed = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .try_init();
    if installed.is_err() {
        tracing::debug!("Logging already initialized");
    }
}

// =============================================================================
// FFI mirror types
// =============================================================================

fn to_unix(ts: DateTime<Utc>) -> i64 {
    ts.timestamp()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLendingStatus {
    Available,
    CheckedOut,
    Overdue,
    Reserved,
}

impl From<LendingStatus> for FfiLendingStatus {
    fn from(status: LendingStatus) -> Self {
        match status {
            LendingStatus::Available => FfiLendingStatus::Available,
            LendingStatus::CheckedOut => FfiLendingStatus::CheckedOut,
            LendingStatus::Overdue => FfiLendingStatus::Overdue,
            LendingStatus::Reserved => FfiLendingStatus::Reserved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiTimeFrame {
    Weekly,
    Monthly,
    Yearly,
}

impl From<TimeFrame> for FfiTimeFrame {
    fn from(tf: TimeFrame) -> Self {
        match tf {
            TimeFrame::Weekly => FfiTimeFrame::Weekly,
            TimeFrame::Monthly => FfiTimeFrame::Monthly,
            TimeFrame::Yearly => FfiTimeFrame::Yearly,
        }
    }
}

impl From<FfiTimeFrame> for TimeFrame {
    fn from(tf: FfiTimeFrame) -> Self {
        match tf {
            FfiTimeFrame::Weekly => TimeFrame::Weekly,
            FfiTimeFrame::Monthly => TimeFrame::Monthly,
            FfiTimeFrame::Yearly => TimeFrame::Yearly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiColorScheme {
    Light,
    Dark,
    System,
}

impl From<ColorScheme> for FfiColorScheme {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => FfiColorScheme::Light,
            ColorScheme::Dark => FfiColorScheme::Dark,
            ColorScheme::System => FfiColorScheme::System,
        }
    }
}

impl From<FfiColorScheme> for ColorScheme {
    fn from(scheme: FfiColorScheme) -> Self {
        match scheme {
            FfiColorScheme::Light => ColorScheme::Light,
            FfiColorScheme::Dark => ColorScheme::Dark,
            FfiColorScheme::System => ColorScheme::System,
        }
    }
}

/// FFI-safe wrapper for `Book`, with the derived display fields the views use.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBook {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// Authors joined with ", ".
    pub author: String,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub published_year: String,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    pub genre: String,
    pub average_rating: Option<f64>,
    pub cover_id: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_read: bool,
    pub is_in_library: bool,
    pub reading_progress: f64,
    pub last_read_date: Option<i64>,
    pub status: FfiLendingStatus,
    pub due_date: Option<i64>,
    pub notes: String,
    pub user_rating: Option<u8>,
    pub date_added: i64,
}

impl From<&Book> for FfiBook {
    fn from(b: &Book) -> Self {
        Self {
            id: b.id.clone(),
            title: b.title.clone(),
            authors: b.authors.clone(),
            author: b.author(),
            publisher: b.publisher.clone(),
            published_date: b.published_date.clone(),
            published_year: b.published_year(),
            description: b.description.clone(),
            page_count: b.page_count,
            categories: b.categories.clone(),
            genre: b.genre().to_string(),
            average_rating: b.average_rating,
            cover_id: b.cover_id.clone(),
            cover_image_url: b.cover_image_url(),
            is_read: b.is_read,
            is_in_library: b.is_in_library,
            reading_progress: b.reading_progress,
            last_read_date: b.last_read_date.map(to_unix),
            status: b.status.into(),
            due_date: b.due_date.map(to_unix),
            notes: b.notes.clone(),
            user_rating: b.user_rating,
            date_added: to_unix(b.date_added),
        }
    }
}

impl From<Book> for FfiBook {
    fn from(b: Book) -> Self {
        FfiBook::from(&b)
    }
}

fn books_to_ffi<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<FfiBook> {
    books.into_iter().map(FfiBook::from).collect()
}

/// Input record for a manually added book.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewBook {
    pub title: String,
    pub authors: Vec<String>,
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    pub cover_id: Option<String>,
}

impl From<FfiNewBook> for NewBook {
    fn from(b: FfiNewBook) -> Self {
        NewBook {
            title: b.title,
            authors: b.authors,
            page_count: b.page_count,
            categories: b.categories,
            cover_id: b.cover_id,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReadingGoal {
    pub target: u32,
    pub current: u32,
    pub time_frame: FfiTimeFrame,
    /// `current / target`, 0.0 for a zero target.
    pub progress: f64,
}

impl From<ReadingGoal> for FfiReadingGoal {
    fn from(goal: ReadingGoal) -> Self {
        Self {
            target: goal.target,
            current: goal.current,
            time_frame: goal.time_frame.into(),
            progress: goal.progress(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUserStats {
    pub total_books_read: u32,
    pub pages_read: u64,
    pub favorite_genre: String,
    pub reading_streak: u32,
    pub last_reading_date: Option<i64>,
}

impl From<&UserStats> for FfiUserStats {
    fn from(s: &UserStats) -> Self {
        Self {
            total_books_read: s.total_books_read,
            pages_read: s.pages_read,
            favorite_genre: s.favorite_genre.clone(),
            reading_streak: s.reading_streak,
            last_reading_date: s.last_reading_date.map(to_unix),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppSettings {
    pub color_scheme: FfiColorScheme,
    pub notifications_enabled: bool,
    pub cloud_sync_enabled: bool,
    pub font_scale: f64,
    pub show_reading_progress: bool,
}

impl From<&AppSettings> for FfiAppSettings {
    fn from(s: &AppSettings) -> Self {
        Self {
            color_scheme: s.color_scheme.into(),
            notifications_enabled: s.notifications_enabled,
            cloud_sync_enabled: s.cloud_sync_enabled,
            font_scale: s.font_scale,
            show_reading_progress: s.show_reading_progress,
        }
    }
}

impl From<FfiAppSettings> for AppSettings {
    fn from(s: FfiAppSettings) -> Self {
        AppSettings {
            color_scheme: s.color_scheme.into(),
            notifications_enabled: s.notifications_enabled,
            cloud_sync_enabled: s.cloud_sync_enabled,
            font_scale: s.font_scale,
            show_reading_progress: s.show_reading_progress,
        }
    }
}

/// Result of a progress-changing command.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProgressUpdate {
    pub book: FfiBook,
    pub reading_goal: FfiReadingGoal,
    pub stats: FfiUserStats,
    pub completed_now: bool,
}

impl From<ProgressUpdate> for FfiProgressUpdate {
    fn from(u: ProgressUpdate) -> Self {
        Self {
            book: FfiBook::from(&u.book),
            reading_goal: u.reading_goal.into(),
            stats: FfiUserStats::from(&u.stats),
            completed_now: u.completed_now,
        }
    }
}

/// Result of viewing a book.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBookView {
    pub book: FfiBook,
    pub recently_viewed: Vec<FfiBook>,
    pub related: Vec<FfiBook>,
}

impl From<BookView> for FfiBookView {
    fn from(v: BookView) -> Self {
        Self {
            book: FfiBook::from(&v.book),
            recently_viewed: books_to_ffi(&v.recently_viewed),
            related: books_to_ffi(&v.related),
        }
    }
}

// =============================================================================
// FfiLibraryConfig — Configuration record for library initialization
// =============================================================================

/// Configuration for creating an `FfiLibrary` instance.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLibraryConfig {
    /// Seed the catalog with the demo books.
    pub seed_sample_catalog: bool,
    /// JSON produced by `FfiLibrary.snapshot_json()` in a previous session.
    pub snapshot_json: Option<String>,
}

// =============================================================================
// FfiLibrary — The main object exposed to foreign languages
// =============================================================================

/// The ShelfAI library handle.
///
/// Create one per session with `FfiLibrary::new()` or
/// `FfiLibrary::with_config()`. Calls are serialized internally.
///
/// # Example (Swift)
///
/// ```swift
/// let library = try FfiLibrary.withConfig(config: FfiLibraryConfig(
///     seedSampleCatalog: true, snapshotJson: nil))
/// let book = try library.borrow(bookId: "5")
/// let recs = try library.homeRecommendations()
/// ```
#[derive(uniffi::Object)]
pub struct FfiLibrary {
    inner: SharedLibrary,
}

impl FfiLibrary {
    fn call<R>(&self, f: impl FnOnce(&mut Library) -> shelf_core::Result<R>) -> FfiResult<R> {
        self.inner.try_with(f).map_err(FfiError::from)
    }
}

#[uniffi::export]
impl FfiLibrary {
    /// Create an empty library with default settings.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: SharedLibrary::new(Library::new()),
        })
    }

    /// Create a library from a configuration record.
    #[uniffi::constructor]
    pub fn with_config(config: FfiLibraryConfig) -> Result<Arc<Self>, FfiError> {
        let builder = match config.snapshot_json {
            Some(json) => LibraryBuilder::from_snapshot(LibrarySnapshot::from_json(&json)?),
            None => Library::builder(),
        };
        let library = builder
            .with_sample_catalog(config.seed_sample_catalog)
            .build()
            .map_err(FfiError::from)?;
        Ok(Arc::new(Self {
            inner: SharedLibrary::new(library),
        }))
    }

    // ========================================
    // Catalog Queries
    // ========================================

    pub fn books(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.books())))
    }

    pub fn book(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.book(&book_id).map(FfiBook::from))
    }

    /// Case-insensitive search on title, author and publisher.
    pub fn search(&self, query: String) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.search(&query))))
    }

    pub fn books_in_genre(&self, genre: String) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.books_in_genre(&genre))))
    }

    pub fn genres(&self) -> Result<Vec<String>, FfiError> {
        self.call(|lib| Ok(lib.genres()))
    }

    pub fn currently_reading(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.currently_reading())))
    }

    pub fn want_to_read(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.want_to_read())))
    }

    pub fn finished_books(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.finished_books())))
    }

    pub fn checked_out_books(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.checked_out_books())))
    }

    pub fn overdue_books(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.overdue_books())))
    }

    pub fn recently_viewed(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.recently_viewed())))
    }

    pub fn home_recommendations(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.home_recommendations())))
    }

    /// Related books for the most recently viewed book.
    pub fn related_recommendations(&self) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| Ok(books_to_ffi(lib.related_recommendations())))
    }

    pub fn related_to(&self, book_id: String) -> Result<Vec<FfiBook>, FfiError> {
        self.call(|lib| lib.related_to(&book_id).map(books_to_ffi))
    }

    pub fn reading_goal(&self) -> Result<FfiReadingGoal, FfiError> {
        self.call(|lib| Ok((*lib.reading_goal()).into()))
    }

    pub fn stats(&self) -> Result<FfiUserStats, FfiError> {
        self.call(|lib| Ok(FfiUserStats::from(lib.stats())))
    }

    pub fn settings(&self) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| Ok(FfiAppSettings::from(lib.settings())))
    }

    // ========================================
    // Lending Commands
    // ========================================

    pub fn borrow(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.borrow(&book_id).map(FfiBook::from))
    }

    pub fn return_book(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.return_book(&book_id).map(FfiBook::from))
    }

    pub fn renew(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.renew(&book_id).map(FfiBook::from))
    }

    pub fn reserve(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.reserve(&book_id).map(FfiBook::from))
    }

    pub fn cancel_reservation(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.cancel_reservation(&book_id).map(FfiBook::from))
    }

    /// Returns how many books became overdue.
    pub fn refresh_overdue(&self) -> Result<u32, FfiError> {
        self.call(|lib| Ok(u32::try_from(lib.refresh_overdue()).unwrap_or(u32::MAX)))
    }

    /// Calendar days until due; negative once past due, `None` when not on loan.
    pub fn days_until_due(&self, book_id: String) -> Result<Option<i64>, FfiError> {
        self.call(|lib| lib.days_until_due(&book_id))
    }

    // ========================================
    // Reading Commands
    // ========================================

    pub fn update_progress(
        &self,
        book_id: String,
        progress: f64,
    ) -> Result<FfiProgressUpdate, FfiError> {
        self.call(|lib| lib.update_progress(&book_id, progress).map(FfiProgressUpdate::from))
    }

    pub fn toggle_read_status(&self, book_id: String) -> Result<FfiProgressUpdate, FfiError> {
        self.call(|lib| lib.toggle_read_status(&book_id).map(FfiProgressUpdate::from))
    }

    pub fn mark_currently_reading(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.mark_currently_reading(&book_id).map(FfiBook::from))
    }

    pub fn reset_reading_goal(&self) -> Result<FfiReadingGoal, FfiError> {
        self.call(|lib| Ok(lib.reset_reading_goal().into()))
    }

    pub fn set_goal_target(&self, target: u32) -> Result<FfiReadingGoal, FfiError> {
        self.call(|lib| lib.set_goal_target(target).map(FfiReadingGoal::from))
    }

    pub fn set_goal_time_frame(
        &self,
        time_frame: FfiTimeFrame,
    ) -> Result<FfiReadingGoal, FfiError> {
        self.call(|lib| Ok(lib.set_goal_time_frame(time_frame.into()).into()))
    }

    // ========================================
    // Catalog Commands
    // ========================================

    pub fn add_manual_book(&self, book: FfiNewBook) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.add_manual_book(book.into()).map(FfiBook::from))
    }

    pub fn remove_book(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.remove_book(&book_id).map(FfiBook::from))
    }

    pub fn toggle_library_membership(&self, book_id: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.toggle_library_membership(&book_id).map(FfiBook::from))
    }

    pub fn update_notes(&self, book_id: String, notes: String) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.update_notes(&book_id, notes).map(FfiBook::from))
    }

    /// Set (1-5) or clear the user's rating.
    pub fn update_user_rating(
        &self,
        book_id: String,
        rating: Option<u8>,
    ) -> Result<FfiBook, FfiError> {
        self.call(|lib| lib.update_user_rating(&book_id, rating).map(FfiBook::from))
    }

    /// Record a view; returns the book, the recently-viewed list and related books.
    pub fn add_to_recently_viewed(&self, book_id: String) -> Result<FfiBookView, FfiError> {
        self.call(|lib| lib.add_to_recently_viewed(&book_id).map(FfiBookView::from))
    }

    /// Serialized state for the host to persist.
    pub fn snapshot_json(&self) -> Result<String, FfiError> {
        self.call(|lib| lib.snapshot().to_json())
    }

    // ========================================
    // Settings
    // ========================================

    pub fn set_color_scheme(&self, scheme: FfiColorScheme) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| Ok(FfiAppSettings::from(lib.set_color_scheme(scheme.into()))))
    }

    pub fn set_notifications_enabled(&self, enabled: bool) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| Ok(FfiAppSettings::from(lib.set_notifications_enabled(enabled))))
    }

    pub fn set_cloud_sync_enabled(&self, enabled: bool) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| Ok(FfiAppSettings::from(lib.set_cloud_sync_enabled(enabled))))
    }

    pub fn set_font_scale(&self, font_scale: f64) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| lib.set_font_scale(font_scale).map(FfiAppSettings::from))
    }

    pub fn set_show_reading_progress(&self, show: bool) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| Ok(FfiAppSettings::from(lib.set_show_reading_progress(show))))
    }

    pub fn update_settings(&self, settings: FfiAppSettings) -> Result<FfiAppSettings, FfiError> {
        self.call(|lib| lib.update_settings(settings.into()).map(FfiAppSettings::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arc<FfiLibrary> {
        FfiLibrary::with_config(FfiLibraryConfig {
            seed_sample_catalog: true,
            snapshot_json: None,
        })
        .unwrap()
    }

    #[test]
    fn test_ffi_error_conversion() {
        let ffi_err: FfiError = ShelfError::not_found("42").into();
        assert!(matches!(ffi_err, FfiError::NotFound { ref book_id } if book_id == "42"));

        let ffi_err: FfiError = ShelfError::Config {
            message: "zero target".into(),
        }
        .into();
        assert!(matches!(ffi_err, FfiError::Config { .. }));

        let ffi_err: FfiError = ShelfError::LockPoisoned.into();
        assert!(matches!(ffi_err, FfiError::Internal { .. }));
    }

    #[test]
    fn test_ffi_out_of_range_keeps_details() {
        let library = sample();
        let err = library.update_progress("3".into(), 2.0).unwrap_err();
        match err {
            FfiError::OutOfRange { message } => assert!(message.contains("2")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_ffi_book_conversion() {
        let library = sample();
        let book = library.borrow("5".into()).unwrap();

        assert_eq!(book.status, FfiLendingStatus::CheckedOut);
        assert_eq!(book.author, "J.R.R. Tolkien");
        assert_eq!(book.genre, "Fantasy");
        assert_eq!(book.published_year, "1937");
        assert_eq!(
            book.cover_image_url.as_deref(),
            Some("https://covers.openlibrary.org/b/id/823821-L.jpg")
        );
        let until_due = book.due_date.unwrap() - Utc::now().timestamp();
        assert!((14 * 86_400 - 60..=14 * 86_400).contains(&until_due));
    }

    #[test]
    fn test_ffi_goal_and_settings() {
        let library = sample();
        let goal = library.set_goal_target(4).unwrap();
        assert_eq!(goal.progress, 0.0);

        library.update_progress("3".into(), 1.0).unwrap();
        let goal = library.set_goal_time_frame(FfiTimeFrame::Yearly).unwrap();
        assert_eq!(goal.current, 1);
        assert_eq!(goal.progress, 0.25);
        assert_eq!(goal.time_frame, FfiTimeFrame::Yearly);

        let settings = library.set_color_scheme(FfiColorScheme::Dark).unwrap();
        assert_eq!(settings.color_scheme, FfiColorScheme::Dark);
        assert!(library.set_font_scale(99.0).is_err());
    }

    #[test]
    fn test_ffi_snapshot_round_trip() {
        let library = sample();
        library.add_to_recently_viewed("1".into()).unwrap();
        let json = library.snapshot_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["recentlyViewed"][0], "1");

        let restored = FfiLibrary::with_config(FfiLibraryConfig {
            seed_sample_catalog: false,
            snapshot_json: Some(json),
        })
        .unwrap();
        assert_eq!(restored.books().unwrap().len(), 10);
        let recent = restored.recently_viewed().unwrap();
        assert_eq!(recent[0].id, "1");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
        assert!(!version().is_empty());
    }
}
