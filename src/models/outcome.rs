//! Solver output models.

use serde::{Deserialize, Serialize};

use super::section::CourseSection;

/// An ordered, conflict-free set of sections with at most one section
/// per subject. Built transiently during search; the winning set is
/// cloned out of the catalog into the result.
pub type CandidateSet = Vec<CourseSection>;

/// A solved schedule with its score components.
///
/// An empty schedule with score 0 is the normal "no schedule found"
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// The chosen sections.
    pub schedule: CandidateSet,
    /// `course_count * 100 + total_units`. Higher is better.
    pub aggregate_score: f64,
    /// Summed time-of-day preference ranks. Lower is better.
    pub time_preference_score: usize,
    /// Distinct on-campus weekdays. 0 when day minimization is off.
    pub campus_day_count: usize,
}

impl ScoreBreakdown {
    /// The "no schedule found" outcome.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this breakdown carries no sections.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}
