//! Aggregate constraint checks over a candidate course set.
//!
//! Two hard limits: total credit units and the longest idle gap between
//! consecutive classes on the same day. Both are pure predicates used by
//! the solvers and exposed for UI-level "why was this excluded"
//! explanations.

use std::borrow::Borrow;
use std::collections::HashMap;

use crate::models::{CourseSection, Limit, WallTime, Weekday};

/// Total credit units of a set. Unparseable unit values count as 0.
pub fn total_units<S: Borrow<CourseSection>>(sections: &[S]) -> f64 {
    sections.iter().map(|s| s.borrow().units()).sum()
}

/// Whether the set's total units strictly exceed the limit.
pub fn exceeds_max_units<S: Borrow<CourseSection>>(sections: &[S], max_units: &Limit) -> bool {
    match max_units {
        Limit::Unbounded => false,
        Limit::Bounded(max) => total_units(sections) > *max,
    }
}

/// Whether any same-day gap between consecutive classes strictly exceeds
/// the limit (in fractional hours).
///
/// All active slots count, including remote ("online") ones: a long idle
/// window between two classes is penalized even when one of them is
/// attended from home.
pub fn exceeds_max_gap<S: Borrow<CourseSection>>(sections: &[S], max_gap_hours: &Limit) -> bool {
    let max = match max_gap_hours {
        Limit::Unbounded => return false,
        Limit::Bounded(max) => *max,
    };

    // Bucket (start, end) pairs by weekday.
    let mut by_day: HashMap<Weekday, Vec<(WallTime, WallTime)>> = HashMap::new();
    for s in sections {
        for slot in s.borrow().schedule.active_slots() {
            if let (Some(start), Some(end)) = (slot.start, slot.end) {
                for &day in &slot.days {
                    by_day.entry(day).or_default().push((start, end));
                }
            }
        }
    }

    for times in by_day.values_mut() {
        times.sort_by_key(|(start, _)| *start);
        for pair in times.windows(2) {
            let (_, end) = pair[0];
            let (next_start, _) = pair[1];
            let gap_minutes =
                next_start.minutes_from_midnight() as i32 - end.minutes_from_midnight() as i32;
            if gap_minutes > 0 && gap_minutes as f64 / 60.0 > max {
                return true;
            }
        }
    }
    false
}
