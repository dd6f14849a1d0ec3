//! Timetabling domain models.
//!
//! Core data types for representing a term's course catalog and a
//! student's scheduling request. Everything here is plain data: the
//! engine consumes these read-only and returns freshly built results.
//!
//! | Type | Role |
//! |------|------|
//! | `MeetingPattern` / `ParsedSchedule` | A section's weekly meeting slots |
//! | `CourseSection` | One offering of a subject |
//! | `Constraints` / `Preferences` | The student's request |
//! | `CandidateSet` / `ScoreBreakdown` | Solver output |

mod outcome;
mod pattern;
mod request;
mod section;
mod time;

pub use outcome::{CandidateSet, ScoreBreakdown};
pub use pattern::{MeetingPattern, ParsedSchedule};
pub use request::{Constraints, Limit, Preferences};
pub use section::CourseSection;
pub use time::{TimeOfDay, WallTime, Weekday};
