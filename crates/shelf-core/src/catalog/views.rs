//! Filtered shelf views used by the presentation layer.

use crate::models::{Book, LendingStatus};
use std::cmp::Reverse;

/// Books started but not finished, most recently read first.
pub fn currently_reading(books: &[Book]) -> Vec<&Book> {
    let mut reading: Vec<&Book> = books
        .iter()
        .filter(|b| b.reading_progress > 0.0 && b.reading_progress < 1.0)
        .collect();
    // None sorts below Some, so never-read books land last.
    reading.sort_by_key(|b| Reverse(b.last_read_date));
    reading
}

/// Owned books that have not been started.
pub fn want_to_read(books: &[Book]) -> Vec<&Book> {
    books
        .iter()
        .filter(|b| b.is_in_library && b.reading_progress == 0.0)
        .collect()
}

pub fn finished(books: &[Book]) -> Vec<&Book> {
    books.iter().filter(|b| b.is_read).collect()
}

/// Books on loan, overdue included.
pub fn checked_out(books: &[Book]) -> Vec<&Book> {
    books.iter().filter(|b| b.status.is_on_loan()).collect()
}

pub fn overdue(books: &[Book]) -> Vec<&Book> {
    books
        .iter()
        .filter(|b| b.status == LendingStatus::Overdue)
        .collect()
}
