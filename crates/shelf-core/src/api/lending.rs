//! Lending commands.
//!
//! Invalid transitions are permissive no-ops: the command succeeds and hands
//! back the unchanged book. Use [`Library::apply_lending`] together with
//! [`TransitionOutcome::into_strict`] to treat them as errors instead.

use tracing::{debug, warn};

use crate::error::Result;
use crate::lending::{self, LendingOp, TransitionOutcome};
use crate::models::Book;
use crate::Library;

impl Library {
    /// Apply a lending operation and report what happened.
    pub fn apply_lending(&mut self, book_id: &str, op: LendingOp) -> Result<TransitionOutcome> {
        let now = self.now();
        let book = self.find_mut(book_id)?;
        let was_in_library = book.is_in_library;
        let outcome = lending::apply(book, op, now);
        let membership_changed = book.is_in_library != was_in_library;

        match outcome {
            TransitionOutcome::Applied { from, to } => {
                debug!("{} book {}: {} -> {}", op, book_id, from, to);
            }
            TransitionOutcome::Ignored { status } => {
                warn!("Ignoring {} for book {} while it is {}", op, book_id, status);
                return Ok(outcome);
            }
        }

        self.refresh_stats();
        if membership_changed {
            self.refresh_recommendations();
        }
        Ok(outcome)
    }

    /// Check a book out for the loan period. Also adds it to the library.
    pub fn borrow(&mut self, book_id: &str) -> Result<Book> {
        self.lend(book_id, LendingOp::Borrow)
    }

    pub fn return_book(&mut self, book_id: &str) -> Result<Book> {
        self.lend(book_id, LendingOp::Return)
    }

    /// Restart the loan period. Only checked-out books can be renewed.
    pub fn renew(&mut self, book_id: &str) -> Result<Book> {
        self.lend(book_id, LendingOp::Renew)
    }

    pub fn reserve(&mut self, book_id: &str) -> Result<Book> {
        self.lend(book_id, LendingOp::Reserve)
    }

    pub fn cancel_reservation(&mut self, book_id: &str) -> Result<Book> {
        self.lend(book_id, LendingOp::CancelReservation)
    }

    /// Move past-due loans to overdue. Returns how many changed.
    pub fn refresh_overdue(&mut self) -> usize {
        let now = self.now();
        let changed = lending::recompute_overdue(self.catalog.iter_mut(), now);
        if changed > 0 {
            debug!("{} books are now overdue", changed);
        }
        changed
    }

    /// Calendar days until the book is due, negative once past due.
    pub fn days_until_due(&self, book_id: &str) -> Result<Option<i64>> {
        let now = self.now();
        Ok(self.find(book_id)?.days_until_due(now))
    }

    fn lend(&mut self, book_id: &str, op: LendingOp) -> Result<Book> {
        self.apply_lending(book_id, op)?;
        self.snapshot_of(book_id)
    }
}
