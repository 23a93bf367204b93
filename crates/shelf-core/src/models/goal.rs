//! Reading goal types.

use crate::config::GoalConfig;
use serde::{Deserialize, Serialize};

/// Period a reading goal covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl TimeFrame {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeFrame::Weekly => "Weekly",
            TimeFrame::Monthly => "Monthly",
            TimeFrame::Yearly => "Yearly",
        }
    }
}

/// Target number of books to finish within a time frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingGoal {
    pub target: u32,
    pub current: u32,
    pub time_frame: TimeFrame,
}

impl ReadingGoal {
    pub fn new(target: u32, time_frame: TimeFrame) -> Self {
        Self {
            target,
            current: 0,
            time_frame,
        }
    }

    /// Fraction of the target reached. A zero target yields 0.0.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.target)
    }

    pub fn is_met(&self) -> bool {
        self.target > 0 && self.current >= self.target
    }

    pub(crate) fn record_completion(&mut self) {
        self.current = self.current.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl Default for ReadingGoal {
    fn default() -> Self {
        Self::new(GoalConfig::DEFAULT_TARGET, TimeFrame::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let goal = ReadingGoal {
            target: 10,
            current: 3,
            time_frame: TimeFrame::Monthly,
        };
        assert!((goal.progress() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_target_is_guarded() {
        let goal = ReadingGoal {
            target: 0,
            current: 4,
            time_frame: TimeFrame::Weekly,
        };
        assert_eq!(goal.progress(), 0.0);
        assert!(!goal.is_met());
    }

    #[test]
    fn test_default_goal() {
        let goal = ReadingGoal::default();
        assert_eq!(goal.target, 10);
        assert_eq!(goal.current, 0);
        assert_eq!(goal.time_frame, TimeFrame::Monthly);
    }

    #[test]
    fn test_completion_and_reset() {
        let mut goal = ReadingGoal::new(2, TimeFrame::Yearly);
        goal.record_completion();
        goal.record_completion();
        assert!(goal.is_met());
        goal.reset();
        assert_eq!(goal.current, 0);
    }

    #[test]
    fn test_time_frame_serde() {
        assert_eq!(serde_json::to_string(&TimeFrame::Yearly).unwrap(), "\"yearly\"");
        assert_eq!(TimeFrame::Weekly.display_name(), "Weekly");
    }
}
