//! Reading progress, goal accounting, derived stats and the streak check.

mod stats;
mod streak;
mod tracker;

pub use stats::{favorite_genre, recompute_stats};
pub use streak::{check_streak, StreakChange};
pub use tracker::{
    mark_currently_reading, toggle_read, update_progress, validate_book, validate_progress,
    validate_user_rating,
};
