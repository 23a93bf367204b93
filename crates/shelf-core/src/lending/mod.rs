//! Lending state machine.
//!
//! Transitions:
//!
//! ```text
//! Available  --Borrow-------------> CheckedOut
//! CheckedOut --Renew--------------> CheckedOut   (due date extended)
//! CheckedOut --Return-------------> Available
//! CheckedOut --(due date elapsed)-> Overdue      (recompute_overdue)
//! Overdue    --Return-------------> Available
//! *          --Reserve------------> Reserved
//! Reserved   --CancelReservation--> Available
//! ```
//!
//! Any other combination is a silent no-op reported as
//! [`TransitionOutcome::Ignored`]. No state is terminal.

use crate::config::LendingConfig;
use crate::error::{Result, ShelfError};
use crate::models::{Book, LendingStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations that can move a book between lending states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LendingOp {
    Borrow,
    Return,
    Renew,
    Reserve,
    CancelReservation,
}

impl LendingOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LendingOp::Borrow => "borrow",
            LendingOp::Return => "return",
            LendingOp::Renew => "renew",
            LendingOp::Reserve => "reserve",
            LendingOp::CancelReservation => "cancel reservation",
        }
    }
}

impl fmt::Display for LendingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a lending operation did to a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied {
        from: LendingStatus,
        to: LendingStatus,
    },
    Ignored {
        status: LendingStatus,
    },
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied { .. })
    }

    /// Turn an ignored transition into an `InvalidTransition` error.
    pub fn into_strict(self, book_id: &str, op: LendingOp) -> Result<Self> {
        match self {
            TransitionOutcome::Ignored { status } => Err(ShelfError::InvalidTransition {
                book_id: book_id.to_string(),
                status,
                operation: op.as_str().to_string(),
            }),
            applied => Ok(applied),
        }
    }
}

/// Due date for a loan starting (or renewed) at `now`.
pub fn due_date_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(LendingConfig::LOAN_PERIOD_DAYS)
}

/// The status `op` leads to from `status`, or `None` when it does not apply.
pub fn next_status(status: LendingStatus, op: LendingOp) -> Option<LendingStatus> {
    use LendingOp::*;
    use LendingStatus::*;

    match (status, op) {
        (Available, Borrow) => Some(CheckedOut),
        (CheckedOut, Renew) => Some(CheckedOut),
        (CheckedOut | Overdue, Return) => Some(Available),
        (_, Reserve) => Some(Reserved),
        (Reserved, CancelReservation) => Some(Available),
        _ => None,
    }
}

/// Apply `op` to `book` at time `now`.
///
/// Borrowing also marks the book as in the library (stamping `date_added` if
/// it was not already). Every transition keeps the due date consistent with
/// the new status.
pub fn apply(book: &mut Book, op: LendingOp, now: DateTime<Utc>) -> TransitionOutcome {
    let from = book.status;
    let Some(to) = next_status(from, op) else {
        return TransitionOutcome::Ignored { status: from };
    };

    match op {
        LendingOp::Borrow => {
            book.due_date = Some(due_date_from(now));
            if !book.is_in_library {
                book.is_in_library = true;
                book.date_added = now;
            }
        }
        LendingOp::Renew => book.due_date = Some(due_date_from(now)),
        LendingOp::Return | LendingOp::Reserve | LendingOp::CancelReservation => {
            book.due_date = None;
        }
    }
    book.status = to;

    TransitionOutcome::Applied { from, to }
}

/// Move every checked-out book whose due date has passed to overdue.
///
/// Returns the number of books that changed. Idempotent for a fixed `now`.
pub fn recompute_overdue<'a>(
    books: impl IntoIterator<Item = &'a mut Book>,
    now: DateTime<Utc>,
) -> usize {
    let mut changed = 0;
    for book in books {
        let past_due = book.due_date.is_some_and(|due| due < now);
        if book.status == LendingStatus::CheckedOut && past_due {
            book.status = LendingStatus::Overdue;
            changed += 1;
        }
    }
    changed
}
