//! Per-book progress updates and reading-goal accounting.
//!
//! The goal counter moves only when a book crosses from not complete to
//! complete inside a single call, so repeating a completion never counts the
//! same book twice.

use crate::config::CatalogConfig;
use crate::error::{Result, ShelfError};
use crate::models::{Book, ReadingGoal};
use chrono::{DateTime, Utc};

/// Reject progress values outside `[0, 1]` (NaN included).
pub fn validate_progress(progress: f64) -> Result<()> {
    if (0.0..=1.0).contains(&progress) {
        Ok(())
    } else {
        Err(ShelfError::OutOfRange {
            field: "reading_progress".to_string(),
            value: progress,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Check a book record coming from outside the facade (builder input,
/// snapshot restore, upsert) against the per-book invariants.
pub fn validate_book(book: &Book) -> Result<()> {
    validate_progress(book.reading_progress)?;
    if book.reading_progress >= 1.0 && !book.is_read {
        return Err(ShelfError::validation(
            "is_read",
            format!("Book {} has full progress but is not marked read", book.id),
        ));
    }
    if book.status.is_on_loan() && book.due_date.is_none() {
        return Err(ShelfError::validation(
            "due_date",
            format!("Book {} is {} without a due date", book.id, book.status),
        ));
    }
    if !book.status.is_on_loan() && book.due_date.is_some() {
        return Err(ShelfError::validation(
            "due_date",
            format!("Book {} is {} but has a due date", book.id, book.status),
        ));
    }
    if let Some(rating) = book.user_rating {
        validate_user_rating(rating)?;
    }
    Ok(())
}

/// User ratings are whole stars from 1 to 5.
pub fn validate_user_rating(rating: u8) -> Result<()> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ShelfError::validation(
            "user_rating",
            format!("Rating must be between 1 and 5, got {}", rating),
        ))
    }
}

/// Set a book's reading progress.
///
/// Returns whether the book became complete with this call.
pub fn update_progress(
    book: &mut Book,
    goal: &mut ReadingGoal,
    progress: f64,
    now: DateTime<Utc>,
) -> Result<bool> {
    validate_progress(progress)?;

    let was_complete = book.is_complete();
    book.reading_progress = progress;
    book.last_read_date = Some(now);
    if progress >= 1.0 {
        book.is_read = true;
    }

    Ok(record_if_completed(book, goal, was_complete))
}

/// Flip the read flag.
///
/// Becoming read also fills progress and stamps the read date. Becoming
/// unread clears the flag and drops full progress back to zero, so an unread
/// book never looks complete. Returns whether the book became complete.
pub fn toggle_read(book: &mut Book, goal: &mut ReadingGoal, now: DateTime<Utc>) -> bool {
    let was_complete = book.is_complete();
    book.is_read = !book.is_read;
    if book.is_read {
        book.reading_progress = 1.0;
        book.last_read_date = Some(now);
    } else if book.reading_progress >= 1.0 {
        book.reading_progress = 0.0;
    }
    record_if_completed(book, goal, was_complete)
}

/// Put a book on the currently-reading shelf.
pub fn mark_currently_reading(book: &mut Book, now: DateTime<Utc>) {
    book.reading_progress = CatalogConfig::STARTED_PROGRESS;
    book.last_read_date = Some(now);
}

fn record_if_completed(book: &Book, goal: &mut ReadingGoal, was_complete: bool) -> bool {
    let completed_now = !was_complete && book.is_complete();
    if completed_now {
        goal.record_completion();
    }
    completed_now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LendingStatus, TimeFrame};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap()
    }

    fn fresh() -> Book {
        Book::new("b", "Book", vec!["Anon".into()], now() - Duration::days(10))
    }

    #[test]
    fn test_full_progress_marks_read_and_counts_once() {
        let mut book = fresh();
        let mut goal = ReadingGoal::new(10, TimeFrame::Monthly);

        assert!(update_progress(&mut book, &mut goal, 1.0, now()).unwrap());
        assert!(book.is_read);
        assert_eq!(book.last_read_date, Some(now()));
        assert_eq!(goal.current, 1);

        assert!(!update_progress(&mut book, &mut goal, 1.0, now()).unwrap());
        assert_eq!(goal.current, 1);
    }

    #[test]
    fn test_zero_progress_leaves_book_unread() {
        let mut book = fresh();
        let mut goal = ReadingGoal::default();

        assert!(!update_progress(&mut book, &mut goal, 0.0, now()).unwrap());
        assert!(!book.is_read);
        assert_eq!(book.last_read_date, Some(now()));
        assert_eq!(goal.current, 0);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_mutation() {
        let mut book = fresh();
        let mut goal = ReadingGoal::default();

        for bad in [-0.1, 1.5, f64::NAN] {
            let err = update_progress(&mut book, &mut goal, bad, now()).unwrap_err();
            assert!(matches!(err, ShelfError::OutOfRange { .. }));
        }
        assert_eq!(book, fresh());
        assert_eq!(goal.current, 0);
    }

    #[test]
    fn test_toggle_read_counts_through_the_guard() {
        let mut book = fresh();
        let mut goal = ReadingGoal::default();

        assert!(toggle_read(&mut book, &mut goal, now()));
        assert!(book.is_read);
        assert_eq!(book.reading_progress, 1.0);
        assert_eq!(goal.current, 1);

        assert!(!toggle_read(&mut book, &mut goal, now()));
        assert!(!book.is_read);
        assert_eq!(book.reading_progress, 0.0);
        assert!(!book.is_complete());
        assert!(validate_book(&book).is_ok());

        // Finishing it again is a new completion.
        assert!(toggle_read(&mut book, &mut goal, now()));
        assert_eq!(goal.current, 2);
    }

    #[test]
    fn test_toggle_unread_keeps_partial_progress() {
        let mut book = fresh();
        book.is_read = true;
        book.reading_progress = 0.4;
        let mut goal = ReadingGoal::default();

        assert!(!toggle_read(&mut book, &mut goal, now()));
        assert!(!book.is_read);
        assert_eq!(book.reading_progress, 0.4);
    }

    #[test]
    fn test_validate_book_rejects_inconsistent_records() {
        assert!(validate_book(&fresh()).is_ok());

        let mut unread_full = fresh();
        unread_full.reading_progress = 1.0;
        let err = validate_book(&unread_full).unwrap_err();
        assert!(matches!(err, ShelfError::Validation { ref field, .. } if field == "is_read"));

        let mut overdue_without_due = fresh();
        overdue_without_due.status = LendingStatus::Overdue;
        let err = validate_book(&overdue_without_due).unwrap_err();
        assert!(matches!(err, ShelfError::Validation { ref field, .. } if field == "due_date"));

        for status in [LendingStatus::Available, LendingStatus::Reserved] {
            let mut stray_due = fresh();
            stray_due.status = status;
            stray_due.due_date = Some(now());
            let err = validate_book(&stray_due).unwrap_err();
            assert!(matches!(err, ShelfError::Validation { ref field, .. } if field == "due_date"));
        }

        let mut bad_rating = fresh();
        bad_rating.user_rating = Some(7);
        let err = validate_book(&bad_rating).unwrap_err();
        assert!(matches!(err, ShelfError::Validation { ref field, .. } if field == "user_rating"));

        let mut on_loan = fresh();
        on_loan.status = LendingStatus::CheckedOut;
        on_loan.due_date = Some(now() + Duration::days(14));
        on_loan.user_rating = Some(5);
        assert!(validate_book(&on_loan).is_ok());
    }

    #[test]
    fn test_toggle_after_partial_progress_counts() {
        let mut book = fresh();
        let mut goal = ReadingGoal::default();
        update_progress(&mut book, &mut goal, 0.5, now()).unwrap();

        assert!(toggle_read(&mut book, &mut goal, now()));
        assert_eq!(goal.current, 1);
    }

    #[test]
    fn test_mark_currently_reading() {
        let mut book = fresh();
        mark_currently_reading(&mut book, now());
        assert_eq!(book.reading_progress, 0.1);
        assert_eq!(book.last_read_date, Some(now()));
        assert!(!book.is_read);
    }
}
