//! Reading progress and reading-goal commands.

use tracing::{debug, info};

use crate::error::{Result, ShelfError};
use crate::models::{Book, ProgressUpdate, ReadingGoal, TimeFrame};
use crate::progress;
use crate::{unknown_book, Library};

impl Library {
    /// Set a book's reading progress in `[0, 1]`.
    ///
    /// Reaching 1.0 marks the book read and, on the first crossing into
    /// completion, counts it toward the reading goal.
    pub fn update_progress(&mut self, book_id: &str, value: f64) -> Result<ProgressUpdate> {
        let now = self.now();
        let book = self
            .catalog
            .get_mut(book_id)
            .ok_or_else(|| unknown_book(book_id))?;
        let completed_now = progress::update_progress(book, &mut self.reading_goal, value, now)?;
        debug!("Progress for book {} set to {:.2}", book_id, value);
        self.after_progress(book_id, completed_now)
    }

    /// Flip a book's read flag.
    pub fn toggle_read_status(&mut self, book_id: &str) -> Result<ProgressUpdate> {
        let now = self.now();
        let book = self
            .catalog
            .get_mut(book_id)
            .ok_or_else(|| unknown_book(book_id))?;
        let completed_now = progress::toggle_read(book, &mut self.reading_goal, now);
        debug!("Toggled read status of book {}", book_id);
        self.after_progress(book_id, completed_now)
    }

    /// Start a book: small non-zero progress so it shows as currently reading.
    pub fn mark_currently_reading(&mut self, book_id: &str) -> Result<Book> {
        let now = self.now();
        progress::mark_currently_reading(self.find_mut(book_id)?, now);
        self.refresh_stats();
        self.snapshot_of(book_id)
    }

    pub fn reset_reading_goal(&mut self) -> ReadingGoal {
        self.reading_goal.reset();
        info!("Reading goal reset");
        self.reading_goal
    }

    /// Change the goal target. Must be at least 1.
    pub fn set_goal_target(&mut self, target: u32) -> Result<ReadingGoal> {
        if target == 0 {
            return Err(ShelfError::Config {
                message: "Reading goal target must be at least 1".to_string(),
            });
        }
        self.reading_goal.target = target;
        debug!("Reading goal target set to {}", target);
        Ok(self.reading_goal)
    }

    pub fn set_goal_time_frame(&mut self, time_frame: TimeFrame) -> ReadingGoal {
        self.reading_goal.time_frame = time_frame;
        self.reading_goal
    }

    fn after_progress(&mut self, book_id: &str, completed_now: bool) -> Result<ProgressUpdate> {
        if completed_now {
            info!(
                "Finished book {} ({}/{} toward goal)",
                book_id, self.reading_goal.current, self.reading_goal.target
            );
        }
        self.refresh_stats();
        Ok(ProgressUpdate {
            book: self.snapshot_of(book_id)?,
            reading_goal: self.reading_goal,
            stats: self.stats.clone(),
            completed_now,
        })
    }
}
