//! Scheduling constraints and student preferences.
//!
//! Constraints are hard limits a candidate schedule must satisfy;
//! preferences rank otherwise-valid schedules against each other.

use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// An upper limit that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Limit {
    /// No limit; the corresponding check always passes.
    Unbounded,
    /// Inclusive upper bound. Must be finite and non-negative.
    Bounded(f64),
}

impl Default for Limit {
    fn default() -> Self {
        Self::Unbounded
    }
}

/// Hard limits on a candidate schedule.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Maximum total credit units.
    pub max_units: Limit,
    /// Maximum idle gap between consecutive classes on the same day, in hours.
    pub max_gap_hours: Limit,
}

impl Constraints {
    /// Creates unbounded constraints (every check passes).
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the unit cap.
    pub fn with_max_units(mut self, max_units: f64) -> Self {
        self.max_units = Limit::Bounded(max_units);
        self
    }

    /// Sets the gap cap in hours.
    pub fn with_max_gap_hours(mut self, max_gap_hours: f64) -> Self {
        self.max_gap_hours = Limit::Bounded(max_gap_hours);
        self
    }
}

/// Student preferences for ranking valid schedules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Time-of-day buckets in preference order; earlier = more preferred.
    /// A bucket absent from the list ranks last. Empty list = no signal.
    pub time_of_day_rank: Vec<TimeOfDay>,
    /// Whether to prefer schedules touching fewer distinct campus days.
    pub minimize_campus_days: bool,
}

impl Preferences {
    /// Creates neutral preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time-of-day preference order.
    pub fn with_time_of_day_rank(mut self, rank: Vec<TimeOfDay>) -> Self {
        self.time_of_day_rank = rank;
        self
    }

    /// Enables campus-day minimization.
    pub fn minimizing_campus_days(mut self) -> Self {
        self.minimize_campus_days = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_is_unbounded() {
        assert_eq!(Limit::default(), Limit::Unbounded);
        let c = Constraints::unbounded();
        assert_eq!(c.max_units, Limit::Unbounded);
        assert_eq!(c.max_gap_hours, Limit::Unbounded);
    }

    #[test]
    fn test_constraint_builders() {
        let c = Constraints::unbounded()
            .with_max_units(21.0)
            .with_max_gap_hours(2.5);
        assert_eq!(c.max_units, Limit::Bounded(21.0));
        assert_eq!(c.max_gap_hours, Limit::Bounded(2.5));
    }

    #[test]
    fn test_preference_builders() {
        let p = Preferences::new()
            .with_time_of_day_rank(vec![TimeOfDay::Morning, TimeOfDay::Afternoon])
            .minimizing_campus_days();
        assert_eq!(p.time_of_day_rank.len(), 2);
        assert!(p.minimize_campus_days);
    }
}
