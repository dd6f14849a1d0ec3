//! Conflict-free weekly course schedule search.
//!
//! Given a catalog of course sections, hard limits (total units, maximum
//! same-day gap), and preferences (time-of-day order, campus-day
//! minimization), this crate finds the best schedule that picks at most
//! one section per subject with no overlapping meeting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseSection`, `MeetingPattern`,
//!   `ParsedSchedule`, `Constraints`, `Preferences`, `ScoreBreakdown`
//! - **`conflict`**: Pairwise meeting-time overlap detection
//! - **`constraints`**: Unit-cap and gap-cap predicates
//! - **`scoring`**: Time-of-day and campus-day preference scoring
//! - **`solver`**: The two search strategies — exhaustive backtracking
//!   (every subject required) and best-effort subset search (subjects
//!   may be dropped)
//! - **`validation`**: Fail-fast checks for misconfigured requests
//!
//! # Architecture
//!
//! Catalog ingestion (raw text parsing), calendar export, and UI state
//! live upstream/downstream of this crate; the engine consumes already
//! parsed, immutable sections and returns freshly built results. All
//! entry points are synchronous pure functions — the exhaustive path is
//! worst-case exponential, so interactive callers should size their
//! input or run the search off the interactive thread.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Carter & Laporte (1997), "Recent Developments in Practical Course
//!   Timetabling"

pub mod conflict;
pub mod constraints;
pub mod models;
pub mod scoring;
pub mod solver;
pub mod validation;

pub use conflict::{conflict_free, overlaps};
pub use constraints::{exceeds_max_gap, exceeds_max_units};
pub use scoring::{campus_day_count, time_preference_score};
pub use solver::{generate_best_effort, generate_exhaustive};
