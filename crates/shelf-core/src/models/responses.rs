//! Snapshots returned by facade commands.

use super::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Result of a progress-changing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub book: Book,
    pub reading_goal: ReadingGoal,
    pub stats: UserStats,
    /// True when this call moved the book into completion.
    pub completed_now: bool,
}

/// Result of viewing a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub book: Book,
    pub recently_viewed: Vec<Book>,
    pub related: Vec<Book>,
}

/// Full facade state handed to the host for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    #[serde(default)]
    pub reading_goal: ReadingGoal,
    #[serde(default)]
    pub settings: AppSettings,
    #[serde(default)]
    pub user_stats: UserStats,
    #[serde(default)]
    pub recently_viewed: Vec<String>,
}

impl LibrarySnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
