//! Preference scoring for candidate course sets.
//!
//! Two signals rank schedules that already satisfy all hard constraints:
//! a time-of-day preference score (lower = better) and the number of
//! distinct campus days (used only when day minimization is requested).
//! The aggregate score rewards course and unit coverage.

use std::borrow::Borrow;
use std::collections::HashSet;

use crate::models::{CourseSection, TimeOfDay, WallTime, Weekday};

/// Buckets a start time: before 12:00 morning, before 17:00 afternoon,
/// otherwise evening. A missing time buckets as `Any`.
pub fn time_of_day_bucket(start: Option<WallTime>) -> TimeOfDay {
    match start {
        None => TimeOfDay::Any,
        Some(t) if t.hour < 12 => TimeOfDay::Morning,
        Some(t) if t.hour < 17 => TimeOfDay::Afternoon,
        Some(_) => TimeOfDay::Evening,
    }
}

/// Rank of a bucket in the preference order; absent buckets rank last.
fn rank_of(bucket: TimeOfDay, rank: &[TimeOfDay]) -> usize {
    rank.iter().position(|&b| b == bucket).unwrap_or(rank.len())
}

/// Summed time-of-day preference ranks across a set. Lower is better.
///
/// Each section contributes its most preferred bucket across its slots'
/// start times; a section with no slots contributes `rank.len()` (least
/// preferred). An empty rank list carries no signal and scores 0.
pub fn time_preference_score<S: Borrow<CourseSection>>(
    sections: &[S],
    rank: &[TimeOfDay],
) -> usize {
    if rank.is_empty() {
        return 0;
    }
    sections
        .iter()
        .map(|s| {
            let sched = &s.borrow().schedule;
            if sched.is_tba || sched.slots.is_empty() {
                return rank.len();
            }
            sched
                .slots
                .iter()
                .map(|slot| rank_of(time_of_day_bucket(slot.start), rank))
                .min()
                .unwrap_or(rank.len())
        })
        .sum()
}

/// Distinct weekdays on which the set has at least one non-remote slot.
pub fn campus_day_count<S: Borrow<CourseSection>>(sections: &[S]) -> usize {
    let mut days: HashSet<Weekday> = HashSet::new();
    for s in sections {
        for slot in s.borrow().schedule.active_slots() {
            if !slot.is_remote() {
                days.extend(slot.days.iter().copied());
            }
        }
    }
    days.len()
}

/// Coverage score: `course_count * 100 + total_units`. Higher is better,
/// with course count dominating units.
pub fn aggregate_score<S: Borrow<CourseSection>>(sections: &[S]) -> f64 {
    sections.len() as f64 * 100.0 + crate::constraints::total_units(sections)
}
