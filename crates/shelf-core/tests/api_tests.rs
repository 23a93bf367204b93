//! Integration tests for the Library public interface.
//!
//! Every test runs against a manual clock so due dates, streaks and read
//! dates are deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use shelf_core::{
    Book, Clock, ErrorKind, LendingOp, LendingStatus, Library, LibraryBuilder, LibrarySnapshot,
    NewBook, ShelfError, TimeFrame, TransitionOutcome,
};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

/// Clock that starts at `start()` and only moves when told to.
#[derive(Clone, Default)]
struct ManualClock {
    offset_secs: Arc<AtomicI64>,
}

impl ManualClock {
    fn advance(&self, by: Duration) {
        self.offset_secs.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }

    fn now(&self) -> DateTime<Utc> {
        start() + Duration::seconds(self.offset_secs.load(Ordering::SeqCst))
    }

    fn as_clock(&self) -> Clock {
        let this = self.clone();
        Arc::new(move || this.now())
    }
}

fn sample_library() -> (Library, ManualClock) {
    let clock = ManualClock::default();
    let library = Library::builder()
        .with_sample_catalog(true)
        .with_clock(clock.as_clock())
        .build()
        .unwrap();
    (library, clock)
}

fn ids(books: Vec<&Book>) -> Vec<String> {
    books.into_iter().map(|b| b.id.clone()).collect()
}

fn rated(id: &str, rating: f64, in_library: bool) -> Book {
    let mut book = Book::new(id, id, vec!["Anon".into()], start());
    book.average_rating = Some(rating);
    book.is_in_library = in_library;
    book.categories = vec!["Fiction".into()];
    book
}

// --- Lending ---

#[test]
fn test_borrow_sets_due_date_and_membership() {
    let (mut library, clock) = sample_library();
    clock.advance(Duration::hours(5));

    let book = library.borrow("9").unwrap();
    assert_eq!(book.status, LendingStatus::CheckedOut);
    assert_eq!(book.due_date, Some(clock.now() + Duration::days(14)));
    assert!(book.is_in_library);
    assert_eq!(book.date_added, clock.now());
    assert_eq!(library.days_until_due("9").unwrap(), Some(14));
}

#[test]
fn test_borrow_of_unavailable_book_is_a_no_op() {
    let (mut library, clock) = sample_library();
    let before = library.book("2").unwrap().clone();
    clock.advance(Duration::days(1));

    let after = library.borrow("2").unwrap();
    assert_eq!(after, before);

    let outcome = library.apply_lending("2", LendingOp::Borrow).unwrap();
    assert_eq!(
        outcome,
        TransitionOutcome::Ignored {
            status: LendingStatus::CheckedOut
        }
    );
    let err = outcome.into_strict("2", LendingOp::Borrow).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTransition);
}

#[test]
fn test_renew_extends_only_checked_out_books() {
    let (mut library, clock) = sample_library();
    clock.advance(Duration::days(2));

    let renewed = library.renew("6").unwrap();
    assert_eq!(renewed.due_date, Some(clock.now() + Duration::days(14)));

    let available = library.book("5").unwrap().clone();
    assert_eq!(library.renew("5").unwrap(), available);
}

#[test]
fn test_overdue_lifecycle() {
    let (mut library, clock) = sample_library();
    library.borrow("5").unwrap();

    clock.advance(Duration::days(15));
    assert_eq!(library.days_until_due("5").unwrap(), Some(-1));
    assert_eq!(ids(library.overdue_books()), vec!["2", "5", "6"]);
    assert_eq!(library.refresh_overdue(), 0);

    // Overdue books cannot be renewed, only returned.
    assert_eq!(library.renew("5").unwrap().status, LendingStatus::Overdue);
    let returned = library.return_book("5").unwrap();
    assert_eq!(returned.status, LendingStatus::Available);
    assert!(returned.due_date.is_none());
    assert_eq!(ids(library.checked_out_books()), vec!["2", "6"]);
}

#[test]
fn test_reservation_round_trip() {
    let (mut library, _clock) = sample_library();

    let reserved = library.reserve("6").unwrap();
    assert_eq!(reserved.status, LendingStatus::Reserved);
    assert!(reserved.due_date.is_none());

    assert_eq!(library.return_book("6").unwrap().status, LendingStatus::Reserved);
    assert_eq!(
        library.cancel_reservation("6").unwrap().status,
        LendingStatus::Available
    );
    assert_eq!(
        library.cancel_reservation("6").unwrap().status,
        LendingStatus::Available
    );
}

// --- Progress, goal and stats ---

#[test]
fn test_finishing_a_book_updates_goal_and_stats() -> anyhow::Result<()> {
    let (mut library, clock) = sample_library();
    assert_eq!(library.stats().total_books_read, 2);

    let update = library.update_progress("3", 1.0)?;
    assert!(update.completed_now);
    assert!(update.book.is_read);
    assert_eq!(update.book.last_read_date, Some(clock.now()));
    assert_eq!(update.reading_goal.current, 1);
    assert_eq!(update.stats.total_books_read, 3);
    assert_eq!(update.stats.pages_read, 279 + 447 + 328);
    assert_eq!(update.stats.favorite_genre, "Dystopian");
    assert_eq!(update.stats.last_reading_date, Some(clock.now()));

    let again = library.update_progress("3", 1.0)?;
    assert!(!again.completed_now);
    assert_eq!(library.reading_goal().current, 1);
    Ok(())
}

#[test]
fn test_zero_progress_on_fresh_book_stays_unread() {
    let (mut library, _clock) = sample_library();
    let update = library.update_progress("9", 0.0).unwrap();
    assert!(!update.book.is_read);
    assert!(!update.completed_now);
}

#[test]
fn test_out_of_range_progress_is_rejected() {
    let (mut library, _clock) = sample_library();
    let before = library.book("3").unwrap().clone();

    let err = library.update_progress("3", 1.2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(library.book("3").unwrap(), &before);
    assert_eq!(library.reading_goal().current, 0);
}

#[test]
fn test_toggle_read_status_and_currently_reading() {
    let (mut library, clock) = sample_library();

    let update = library.toggle_read_status("9").unwrap();
    assert!(update.book.is_read);
    assert_eq!(update.book.reading_progress, 1.0);
    assert_eq!(update.reading_goal.current, 1);

    clock.advance(Duration::minutes(10));
    library.mark_currently_reading("5").unwrap();
    assert_eq!(ids(library.currently_reading()), vec!["5", "3"]);
    assert_eq!(ids(library.want_to_read()), vec!["1", "7"]);
    assert_eq!(ids(library.finished_books()), vec!["4", "8", "9"]);
}

#[test]
fn test_toggle_back_to_unread_clears_full_progress() {
    let (mut library, _clock) = sample_library();

    library.toggle_read_status("9").unwrap();
    let update = library.toggle_read_status("9").unwrap();
    assert!(!update.book.is_read);
    assert!(update.book.reading_progress < 1.0);
    assert!(!update.book.is_complete());
    assert_eq!(update.stats.total_books_read, 2);
    assert!(!ids(library.finished_books()).contains(&"9".to_string()));
}

#[test]
fn test_goal_configuration() {
    let (mut library, _clock) = sample_library();
    library.update_progress("3", 1.0).unwrap();
    library.update_progress("9", 1.0).unwrap();
    library.update_progress("10", 1.0).unwrap();

    let goal = library.set_goal_target(10).unwrap();
    assert_eq!(goal.progress(), 0.3);

    let err = library.set_goal_target(0).unwrap_err();
    assert!(matches!(err, ShelfError::Config { .. }));
    assert_eq!(library.reading_goal().target, 10);

    assert_eq!(
        library.set_goal_time_frame(TimeFrame::Weekly).time_frame,
        TimeFrame::Weekly
    );
    assert_eq!(library.reset_reading_goal().current, 0);
}

// --- Recommendations and views ---

#[test]
fn test_home_recommendations_filter_and_rank() {
    let library = LibraryBuilder::new()
        .with_books(vec![
            rated("A", 4.8, false),
            rated("B", 3.9, false),
            rated("C", 4.5, true),
        ])
        .build()
        .unwrap();
    assert_eq!(ids(library.home_recommendations()), vec!["A"]);
}

#[test]
fn test_home_recommendations_follow_membership() {
    let (mut library, _clock) = sample_library();
    assert_eq!(ids(library.home_recommendations()), vec!["6", "10", "2", "4", "3"]);

    library.borrow("10").unwrap();
    assert_eq!(ids(library.home_recommendations()), vec!["6", "2", "4", "3", "8"]);

    library.toggle_library_membership("10").unwrap();
    assert_eq!(ids(library.home_recommendations()), vec!["6", "10", "2", "4", "3"]);
}

#[test]
fn test_viewing_books() {
    let (mut library, _clock) = sample_library();

    let view = library.add_to_recently_viewed("1").unwrap();
    assert_eq!(view.book.id, "1");
    assert_eq!(ids(view.related.iter().collect()), vec!["2", "4"]);

    library.toggle_library_membership("2").unwrap();
    assert_eq!(ids(library.related_recommendations()), vec!["4"]);

    for id in ["2", "3", "4", "5", "6"] {
        library.add_to_recently_viewed(id).unwrap();
    }
    assert_eq!(ids(library.recently_viewed()), vec!["6", "5", "4", "3", "2"]);

    // A repeat view keeps the order.
    library.add_to_recently_viewed("4").unwrap();
    assert_eq!(ids(library.recently_viewed()), vec!["6", "5", "4", "3", "2"]);
}

#[test]
fn test_remove_book_purges_views_and_recommendations() {
    let (mut library, _clock) = sample_library();
    library.add_to_recently_viewed("4").unwrap();
    library.add_to_recently_viewed("1").unwrap();
    assert_eq!(ids(library.related_recommendations()), vec!["2", "4"]);

    let removed = library.remove_book("4").unwrap();
    assert_eq!(removed.title, "Pride and Prejudice");
    assert_eq!(ids(library.recently_viewed()), vec!["1"]);
    assert_eq!(ids(library.related_recommendations()), vec!["2"]);
    assert!(!ids(library.home_recommendations()).contains(&"4".to_string()));
    assert_eq!(library.stats().total_books_read, 1);

    assert_eq!(library.remove_book("4").unwrap_err().kind(), ErrorKind::NotFound);
}

// --- Catalog queries and commands ---

#[test]
fn test_search_and_genres() {
    let (library, _clock) = sample_library();
    assert_eq!(ids(library.search("ORWELL")), vec!["3"]);
    assert_eq!(ids(library.search("scholastic")), vec!["7"]);
    assert_eq!(library.search("").len(), 10);
    assert_eq!(ids(library.books_in_genre("Mystery")), vec!["9", "10"]);

    assert_eq!(
        library.genres(),
        vec![
            "All",
            "Adventure",
            "Classic",
            "Dystopian",
            "Fantasy",
            "Horror",
            "Literary Fiction",
            "Mystery",
            "Romance",
            "Science Fiction",
            "Thriller",
            "Young Adult",
        ]
    );
}

#[test]
fn test_manual_add_notes_and_rating() {
    let (mut library, clock) = sample_library();

    let book = library
        .add_manual_book(NewBook {
            title: "Piranesi".into(),
            authors: vec!["Susanna Clarke".into()],
            page_count: Some(272),
            categories: vec!["Fantasy".into()],
            cover_id: None,
        })
        .unwrap();
    assert!(book.is_in_library);
    assert_eq!(book.status, LendingStatus::Available);
    assert_eq!(book.date_added, clock.now());
    assert_eq!(library.books().len(), 11);

    let noted = library.update_notes(&book.id, "Read in one sitting").unwrap();
    assert_eq!(noted.notes, "Read in one sitting");

    let err = library.update_user_rating(&book.id, Some(9)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(library.update_user_rating(&book.id, Some(5)).unwrap().user_rating, Some(5));

    let err = library.update_notes("nope", "x").unwrap_err();
    assert!(matches!(err, ShelfError::BookNotFound { ref book_id } if book_id == "nope"));
}

#[test]
fn test_snapshot_restores_state() -> anyhow::Result<()> {
    let (mut library, clock) = sample_library();
    library.update_progress("3", 1.0)?;
    library.add_to_recently_viewed("7")?;
    library.set_font_scale(18.0)?;

    let json = library.snapshot().to_json()?;
    let snapshot = LibrarySnapshot::from_json(&json)?;

    let restored = LibraryBuilder::from_snapshot(snapshot)
        .with_clock(clock.as_clock())
        .build()?;
    assert_eq!(restored.books(), library.books());
    assert_eq!(restored.reading_goal(), library.reading_goal());
    assert_eq!(restored.settings().font_scale, 18.0);
    assert_eq!(ids(restored.recently_viewed()), vec!["7"]);
    Ok(())
}
