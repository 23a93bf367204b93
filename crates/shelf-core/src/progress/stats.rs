//! Aggregate reading statistics derived from the catalog.

use crate::config::CatalogConfig;
use crate::models::{Book, UserStats};

/// Rebuild the derived stats from the full catalog.
///
/// The streak is carried over from `previous` untouched. The last reading
/// date is the latest of the carried value and every book's read date.
pub fn recompute_stats(books: &[Book], previous: &UserStats) -> UserStats {
    let read: Vec<&Book> = books.iter().filter(|b| b.is_read).collect();

    let pages_read = read
        .iter()
        .map(|b| u64::from(b.page_count.unwrap_or(0)))
        .sum();

    let last_reading_date = books
        .iter()
        .filter_map(|b| b.last_read_date)
        .chain(previous.last_reading_date)
        .max();

    UserStats {
        total_books_read: u32::try_from(read.len()).unwrap_or(u32::MAX),
        pages_read,
        favorite_genre: favorite_genre(read.iter().copied())
            .unwrap_or(CatalogConfig::NO_FAVORITE_GENRE)
            .to_string(),
        reading_streak: previous.reading_streak,
        last_reading_date,
    }
}

/// Most frequent primary category. Ties go to the genre seen first.
pub fn favorite_genre<'a>(books: impl IntoIterator<Item = &'a Book>) -> Option<&'a str> {
    // Insertion-ordered tally keeps the first-seen tie break.
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for genre in books.into_iter().filter_map(Book::primary_category) {
        match tally.iter_mut().find(|(g, _)| *g == genre) {
            Some((_, count)) => *count += 1,
            None => tally.push((genre, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (genre, count) in tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((genre, count));
        }
    }
    best.map(|(genre, _)| genre)
}
