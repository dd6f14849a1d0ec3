//! Meeting pattern and parsed schedule models.
//!
//! A meeting pattern is one recurring weekly slot of a course section:
//! a set of weekdays, a start/end wall time, and an optional room. The
//! upstream catalog parser (out of scope here) resolves each section's
//! raw schedule text into a [`ParsedSchedule`], which the engine treats
//! as immutable.
//!
//! A pattern with no days or no times is a TBA sentinel and never
//! participates in conflict or gap computation.

use serde::{Deserialize, Serialize};

use super::time::{WallTime, Weekday};

/// One recurring weekly meeting slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingPattern {
    /// Weekdays on which this slot meets. Empty for TBA.
    pub days: Vec<Weekday>,
    /// Start time. `None` for TBA.
    pub start: Option<WallTime>,
    /// End time. `None` for TBA. Invariant (upstream): start < end when both present.
    pub end: Option<WallTime>,
    /// Room, if known. Rooms containing "online" mark the slot as remote.
    pub room: Option<String>,
}

impl MeetingPattern {
    /// Creates a pattern meeting on the given days.
    pub fn new(days: Vec<Weekday>) -> Self {
        Self {
            days,
            start: None,
            end: None,
            room: None,
        }
    }

    /// Creates a TBA pattern (no days, no times).
    pub fn tba() -> Self {
        Self::new(Vec::new())
    }

    /// Sets the meeting time.
    pub fn with_time(mut self, start: WallTime, end: WallTime) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Whether this slot has no fixed meeting days or times.
    pub fn is_tba(&self) -> bool {
        self.days.is_empty() || self.start.is_none() || self.end.is_none()
    }

    /// Whether this slot meets remotely (room contains "online").
    pub fn is_remote(&self) -> bool {
        self.room
            .as_deref()
            .map(|r| r.to_lowercase().contains("online"))
            .unwrap_or(false)
    }

    /// Whether two slots meet on at least one common weekday.
    pub fn shares_day(&self, other: &Self) -> bool {
        self.days.iter().any(|d| other.days.contains(d))
    }
}

/// A section's full weekly schedule as produced by the catalog parser.
///
/// Owned by exactly one [`CourseSection`](super::CourseSection) and never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSchedule {
    /// Meeting slots in catalog order.
    pub slots: Vec<MeetingPattern>,
    /// Whether the whole schedule is "to be announced".
    pub is_tba: bool,
}

impl ParsedSchedule {
    /// Creates a schedule from meeting slots.
    pub fn from_slots(slots: Vec<MeetingPattern>) -> Self {
        Self {
            slots,
            is_tba: false,
        }
    }

    /// Creates a TBA schedule (no slots).
    pub fn tba() -> Self {
        Self {
            slots: Vec::new(),
            is_tba: true,
        }
    }

    /// Slots that participate in conflict and gap computation.
    ///
    /// TBA schedules and TBA slots yield nothing.
    pub fn active_slots(&self) -> impl Iterator<Item = &MeetingPattern> {
        let tba = self.is_tba;
        self.slots
            .iter()
            .filter(move |s| !tba && !s.is_tba())
    }
}

impl Default for ParsedSchedule {
    fn default() -> Self {
        Self::tba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(days: Vec<Weekday>, start: &str, end: &str) -> MeetingPattern {
        MeetingPattern::new(days).with_time(
            WallTime::parse(start).unwrap(),
            WallTime::parse(end).unwrap(),
        )
    }

    #[test]
    fn test_tba_pattern() {
        assert!(MeetingPattern::tba().is_tba());
        // Days without times is still TBA
        assert!(MeetingPattern::new(vec![Weekday::Mon]).is_tba());
        assert!(!slot(vec![Weekday::Mon], "07:30", "09:00").is_tba());
    }

    #[test]
    fn test_is_remote() {
        let s = slot(vec![Weekday::Mon], "07:30", "09:00");
        assert!(!s.is_remote());
        assert!(s.clone().with_room("ONLINE-1").is_remote());
        assert!(s.clone().with_room("Zoom (online)").is_remote());
        assert!(!s.with_room("Rm 204").is_remote());
    }

    #[test]
    fn test_shares_day() {
        let a = slot(vec![Weekday::Mon, Weekday::Wed], "07:30", "09:00");
        let b = slot(vec![Weekday::Wed, Weekday::Fri], "10:00", "11:00");
        let c = slot(vec![Weekday::Tue, Weekday::Thu], "07:30", "09:00");
        assert!(a.shares_day(&b));
        assert!(!a.shares_day(&c));
    }

    #[test]
    fn test_active_slots_skip_tba() {
        let sched = ParsedSchedule::from_slots(vec![
            slot(vec![Weekday::Mon], "07:30", "09:00"),
            MeetingPattern::tba(),
        ]);
        assert_eq!(sched.active_slots().count(), 1);

        let tba = ParsedSchedule::tba();
        assert_eq!(tba.active_slots().count(), 0);
    }

    #[test]
    fn test_tba_flag_suppresses_slots() {
        let mut sched =
            ParsedSchedule::from_slots(vec![slot(vec![Weekday::Mon], "07:30", "09:00")]);
        sched.is_tba = true;
        assert_eq!(sched.active_slots().count(), 0);
    }
}
