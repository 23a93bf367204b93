//! Book record and lending status.

use crate::config::CatalogConfig;
use crate::error::ShelfError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Borrow/hold state of a book. Exactly one value per book at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LendingStatus {
    #[default]
    Available,
    CheckedOut,
    Overdue,
    Reserved,
}

impl LendingStatus {
    pub const ALL: [LendingStatus; 4] = [
        LendingStatus::Available,
        LendingStatus::CheckedOut,
        LendingStatus::Overdue,
        LendingStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LendingStatus::Available => "available",
            LendingStatus::CheckedOut => "checkedOut",
            LendingStatus::Overdue => "overdue",
            LendingStatus::Reserved => "reserved",
        }
    }

    /// Human-readable label for the status.
    pub fn display_name(&self) -> &'static str {
        match self {
            LendingStatus::Available => "Available",
            LendingStatus::CheckedOut => "Checked Out",
            LendingStatus::Overdue => "Overdue",
            LendingStatus::Reserved => "Reserved",
        }
    }

    /// True for the two states that carry a due date.
    pub fn is_on_loan(&self) -> bool {
        matches!(self, LendingStatus::CheckedOut | LendingStatus::Overdue)
    }
}

impl FromStr for LendingStatus {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ShelfError::validation("status", format!("Unknown lending status: {}", s))
            })
    }
}

impl fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked book: immutable catalog fields plus mutable per-user state.
///
/// Invariants maintained by the facade:
/// - `reading_progress >= 1` implies `is_read`
/// - `due_date` is set only while `status` is checked out or overdue
/// - `status == Overdue` implies `due_date` is in the past
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    /// Open Library cover id.
    #[serde(default)]
    pub cover_id: Option<String>,

    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_in_library: bool,
    #[serde(default)]
    pub reading_progress: f64,
    #[serde(default)]
    pub last_read_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: LendingStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub user_rating: Option<u8>,
    pub date_added: DateTime<Utc>,
}

impl Book {
    /// Create a book with empty per-user state.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: Vec<String>,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors,
            publisher: None,
            published_date: None,
            description: None,
            page_count: None,
            categories: Vec::new(),
            average_rating: None,
            cover_id: None,
            is_read: false,
            is_in_library: false,
            reading_progress: 0.0,
            last_read_date: None,
            status: LendingStatus::Available,
            due_date: None,
            notes: String::new(),
            user_rating: None,
            date_added,
        }
    }

    /// Authors joined for display and search.
    pub fn author(&self) -> String {
        self.authors.join(", ")
    }

    /// Primary category, used as the book's genre.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    pub fn genre(&self) -> &str {
        self.primary_category().unwrap_or(CatalogConfig::UNKNOWN_GENRE)
    }

    /// Average rating, 0.0 when unrated.
    pub fn rating(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    /// The user's own rating, else the average rounded down to a half star.
    pub fn user_rating_or_average(&self) -> f64 {
        match self.user_rating {
            Some(rating) => f64::from(rating),
            None => (self.rating() * 2.0).floor() / 2.0,
        }
    }

    /// Whether the book counts as finished.
    pub fn is_complete(&self) -> bool {
        self.is_read || self.reading_progress >= 1.0
    }

    pub fn cover_image_url(&self) -> Option<String> {
        self.cover_id
            .as_ref()
            .map(|id| format!("{}/{}-L.jpg", CatalogConfig::COVER_URL_BASE, id))
    }

    /// Publication year when the date starts with one, else the raw date.
    pub fn published_year(&self) -> String {
        let Some(date) = self.published_date.as_deref() else {
            return "Unknown".to_string();
        };
        let prefix: String = date.chars().take(4).collect();
        match prefix.parse::<i32>() {
            Ok(year) if prefix.len() == 4 => year.to_string(),
            _ => date.to_string(),
        }
    }

    /// Calendar days between today and the due date. Negative once past due.
    pub fn days_until_due(&self, now: DateTime<Utc>) -> Option<i64> {
        self.due_date
            .map(|due| (due.date_naive() - now.date_naive()).num_days())
    }

    /// Case-insensitive substring match on title, joined authors and publisher.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.author().to_lowercase().contains(needle_lower)
            || self
                .publisher
                .as_ref()
                .is_some_and(|p| p.to_lowercase().contains(needle_lower))
    }
}

/// Input for a manually added book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    #[serde(default)]
    pub cover_id: Option<String>,
}
