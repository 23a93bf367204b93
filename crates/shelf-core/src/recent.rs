//! Bounded most-recent-first list of viewed book ids.

use crate::config::RecentlyViewedConfig;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ring of distinct book ids, newest first.
///
/// Viewing a book that is already present leaves the order alone; only first
/// views are inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    ids: VecDeque<String>,
}

impl Default for RecentlyViewed {
    fn default() -> Self {
        Self {
            ids: VecDeque::with_capacity(RecentlyViewedConfig::CAPACITY),
        }
    }
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a newest-first list, dropping duplicates and overflow.
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut ring = Self::new();
        for id in ids {
            if ring.ids.len() == RecentlyViewedConfig::CAPACITY {
                break;
            }
            if !ring.contains(&id) {
                ring.ids.push_back(id);
            }
        }
        ring
    }

    /// Record a view. Returns false when the id was already present.
    pub fn record(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push_front(id.to_string());
        self.ids.truncate(RecentlyViewedConfig::CAPACITY);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
