//! Centralized configuration for the Shelf core.
//!
//! Loan periods, recommendation limits, settings bounds and the sentinel
//! strings shared by catalog queries and stats.

/// Lending configuration.
pub struct LendingConfig;

impl LendingConfig {
    /// Loan period applied on borrow and on every renewal.
    pub const LOAN_PERIOD_DAYS: i64 = 14;
}

/// Recommendation engine limits.
pub struct RecommendationConfig;

impl RecommendationConfig {
    pub const HOME_LIMIT: usize = 5;
    pub const RELATED_LIMIT: usize = 3;
    pub const MIN_HOME_RATING: f64 = 4.0;
}

/// Recently-viewed ring configuration.
pub struct RecentlyViewedConfig;

impl RecentlyViewedConfig {
    pub const CAPACITY: usize = 5;
}

/// Bounds and defaults for user-facing settings.
pub struct SettingsConfig;

impl SettingsConfig {
    pub const FONT_SCALE_MIN: f64 = 14.0;
    pub const FONT_SCALE_MAX: f64 = 24.0;
    pub const FONT_SCALE_DEFAULT: f64 = 16.0;
}

/// Reading goal defaults.
pub struct GoalConfig;

impl GoalConfig {
    pub const DEFAULT_TARGET: u32 = 10;
}

/// Catalog sentinels and derived-field constants.
pub struct CatalogConfig;

impl CatalogConfig {
    /// Leading entry of the genre list; selects every book.
    pub const ALL_GENRES: &'static str = "All";
    /// Genre reported for a book with no categories.
    pub const UNKNOWN_GENRE: &'static str = "Unknown";
    /// Favorite genre when no book has been read.
    pub const NO_FAVORITE_GENRE: &'static str = "None";
    /// Progress assigned by "mark as currently reading".
    pub const STARTED_PROGRESS: f64 = 0.1;
    pub const COVER_URL_BASE: &'static str = "https://covers.openlibrary.org/b/id";
}
