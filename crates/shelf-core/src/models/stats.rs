//! Aggregate reading statistics.

use crate::config::CatalogConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reading statistics derived from the catalog.
///
/// `reading_streak` is the only field not recomputed from book state; it
/// changes once per session when the streak check runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_books_read: u32,
    pub pages_read: u64,
    pub favorite_genre: String,
    pub reading_streak: u32,
    #[serde(default)]
    pub last_reading_date: Option<DateTime<Utc>>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_books_read: 0,
            pages_read: 0,
            favorite_genre: CatalogConfig::NO_FAVORITE_GENRE.to_string(),
            reading_streak: 0,
            last_reading_date: None,
        }
    }
}
