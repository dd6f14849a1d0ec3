//! Pairwise meeting-time conflict detection.
//!
//! Two sections conflict when any two of their slots share a weekday and
//! their time intervals overlap. Intervals are half-open: back-to-back
//! classes (one ends 09:00, the next starts 09:00) do not conflict.
//!
//! TBA schedules and slot-less schedules never conflict with anything;
//! malformed time strings likewise report "no overlap" rather than fail.
//! Callers wanting to surface bad input run
//! [`validation::validate_catalog`](crate::validation::validate_catalog)
//! upstream instead.

use std::borrow::Borrow;

use crate::models::{CourseSection, MeetingPattern, WallTime};

/// Whether two `HH:MM` intervals overlap.
///
/// Strict shape check: any malformed time string makes this return
/// `false` (no overlap), never an error.
pub fn overlaps(start_a: &str, end_a: &str, start_b: &str, end_b: &str) -> bool {
    match (
        WallTime::parse(start_a),
        WallTime::parse(end_a),
        WallTime::parse(start_b),
        WallTime::parse(end_b),
    ) {
        (Some(sa), Some(ea), Some(sb), Some(eb)) => sa < eb && ea > sb,
        _ => false,
    }
}

/// Whether two slots meet at the same time on a common weekday.
///
/// TBA slots never collide.
pub fn slots_collide(a: &MeetingPattern, b: &MeetingPattern) -> bool {
    if a.is_tba() || b.is_tba() || !a.shares_day(b) {
        return false;
    }
    // is_tba() guarantees all four times are present.
    match (a.start, a.end, b.start, b.end) {
        (Some(sa), Some(ea), Some(sb), Some(eb)) => sa < eb && ea > sb,
        _ => false,
    }
}

/// Whether any slot of `a` collides with any slot of `b`.
pub fn sections_conflict(a: &CourseSection, b: &CourseSection) -> bool {
    a.schedule
        .active_slots()
        .any(|sa| b.schedule.active_slots().any(|sb| slots_collide(sa, sb)))
}

/// Whether a set of sections is pairwise conflict-free.
///
/// Sets of size 0 or 1 are trivially conflict-free. O(n² s²) in section
/// count n and slots per section s; n is bounded by subject count or the
/// best-effort solver's subset threshold, so the quadratic scan is fine.
pub fn conflict_free<S: Borrow<CourseSection>>(sections: &[S]) -> bool {
    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            if sections_conflict(a.borrow(), b.borrow()) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParsedSchedule, Weekday};

    fn section(id: &str, subject: &str, days: Vec<Weekday>, start: &str, end: &str) -> CourseSection {
        CourseSection::new(id, subject, "A")
            .with_units("3")
            .with_schedule(ParsedSchedule::from_slots(vec![MeetingPattern::new(days)
                .with_time(
                    WallTime::parse(start).unwrap(),
                    WallTime::parse(end).unwrap(),
                )]))
    }

    #[test]
    fn test_overlaps_basic() {
        assert!(overlaps("07:30", "09:00", "08:00", "09:30"));
        assert!(!overlaps("07:30", "09:00", "09:00", "10:30")); // Back-to-back
        assert!(!overlaps("07:30", "09:00", "10:00", "11:30"));
        // Containment
        assert!(overlaps("08:00", "12:00", "09:00", "10:00"));
    }

    #[test]
    fn test_overlaps_malformed_is_false() {
        assert!(!overlaps("7:30", "09:00", "08:00", "09:30"));
        assert!(!overlaps("07:30", "09:00", "bogus", "09:30"));
        assert!(!overlaps("", "", "", ""));
    }

    #[test]
    fn test_two_course_overlap() {
        // A: Mon/Wed 07:30-09:00, B: Mon 08:00-09:30
        let a = section("1", "IT 111", vec![Weekday::Mon, Weekday::Wed], "07:30", "09:00");
        let b = section("2", "IT 112", vec![Weekday::Mon], "08:00", "09:30");
        assert!(!conflict_free(&[a, b]));
    }

    #[test]
    fn test_disjoint_days() {
        let a = section("1", "IT 111", vec![Weekday::Mon, Weekday::Wed], "07:30", "09:00");
        let c = section("3", "IT 113", vec![Weekday::Tue, Weekday::Thu], "07:30", "09:00");
        assert!(conflict_free(&[a, c]));
    }

    #[test]
    fn test_conflict_symmetry() {
        let a = section("1", "IT 111", vec![Weekday::Mon, Weekday::Wed], "07:30", "09:00");
        let b = section("2", "IT 112", vec![Weekday::Mon], "08:00", "09:30");
        assert_eq!(
            conflict_free(&[a.clone(), b.clone()]),
            conflict_free(&[b, a])
        );
    }

    #[test]
    fn test_empty_and_singleton_are_conflict_free() {
        let empty: Vec<CourseSection> = Vec::new();
        assert!(conflict_free(&empty));

        let x = section("1", "IT 111", vec![Weekday::Mon], "07:30", "09:00");
        assert!(conflict_free(&[x]));
    }

    #[test]
    fn test_tba_never_conflicts() {
        let a = section("1", "IT 111", vec![Weekday::Mon], "07:30", "09:00");
        let tba = CourseSection::new("2", "IT 112", "A").with_schedule(ParsedSchedule::tba());
        assert!(conflict_free(&[a.clone(), tba.clone()]));
        assert!(conflict_free(&[tba.clone(), tba]));

        let slotless = CourseSection::new("3", "IT 113", "A")
            .with_schedule(ParsedSchedule::from_slots(Vec::new()));
        assert!(conflict_free(&[a, slotless]));
    }

    #[test]
    fn test_multi_slot_sections() {
        // Lecture Mon + lab Thu vs. a Thu class at the lab's time.
        let lecture_lab = CourseSection::new("1", "IT 114", "A").with_schedule(
            ParsedSchedule::from_slots(vec![
                MeetingPattern::new(vec![Weekday::Mon]).with_time(
                    WallTime::parse("07:30").unwrap(),
                    WallTime::parse("09:00").unwrap(),
                ),
                MeetingPattern::new(vec![Weekday::Thu]).with_time(
                    WallTime::parse("13:00").unwrap(),
                    WallTime::parse("16:00").unwrap(),
                ),
            ]),
        );
        let thu = section("2", "IT 115", vec![Weekday::Thu], "14:00", "15:00");
        assert!(sections_conflict(&lecture_lab, &thu));
        assert!(!conflict_free(&[lecture_lab, thu]));
    }

    #[test]
    fn test_conflict_free_borrows_references() {
        let a = section("1", "IT 111", vec![Weekday::Mon], "07:30", "09:00");
        let b = section("2", "IT 112", vec![Weekday::Tue], "07:30", "09:00");
        let refs: Vec<&CourseSection> = vec![&a, &b];
        assert!(conflict_free(&refs));
    }
}
