//! Wall-clock time and weekday models.
//!
//! All meeting times are local wall-clock `HH:MM` values within a single
//! term; there is no timezone or date handling. Times compare as
//! minutes-since-midnight, which for zero-padded `HH:MM` strings agrees
//! with lexicographic order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
}

/// A wall-clock time of day.
///
/// Parsed from strict zero-padded `HH:MM` strings. Ordering compares
/// minutes since midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WallTime {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

impl WallTime {
    /// Creates a wall time, returning `None` for out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Parses a strict `HH:MM` string.
    ///
    /// Only the exact five-character zero-padded shape is accepted;
    /// anything else yields `None`. Malformed times must never abort a
    /// comparison, so this is the single point where they drop out.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 5 || b[2] != b':' {
            return None;
        }
        if !b[0].is_ascii_digit()
            || !b[1].is_ascii_digit()
            || !b[3].is_ascii_digit()
            || !b[4].is_ascii_digit()
        {
            return None;
        }
        let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
        let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
        Self::new(hour, minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Time-of-day preference bucket derived from a slot's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// Starts before 12:00.
    Morning,
    /// Starts in [12:00, 17:00).
    Afternoon,
    /// Starts at or after 17:00.
    Evening,
    /// No fixed start time.
    Any,
}
