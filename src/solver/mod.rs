//! Schedule search strategies.
//!
//! Two deliberately distinct solvers share the conflict/constraint
//! predicates but never a mode flag:
//!
//! - [`ExhaustiveSolver`]: backtracking over subject groups, requiring
//!   exactly one section per subject. Worst case is the product of
//!   options per subject; the caller decides when that is tractable.
//! - [`BestEffortSolver`]: maximizes subject/unit coverage over a flat
//!   candidate list, allowing subjects to be dropped. Exact power-set
//!   enumeration for small inputs, randomized greedy construction above
//!   the threshold.
//!
//! Keeping the two as separate types prevents the classic porting bug
//! where "no admissible candidate" in exhaustive mode silently turns
//! into "skip the subject".
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod best_effort;
mod exhaustive;

pub use best_effort::{BestEffortSolver, DEFAULT_SUBSET_THRESHOLD};
pub use exhaustive::{ExhaustiveSolver, SubjectGroup};

use rand::Rng;

use crate::models::{CandidateSet, Constraints, CourseSection, Preferences, ScoreBreakdown};
use crate::scoring::{aggregate_score, campus_day_count, time_preference_score};
use crate::validation::ValidationError;

/// Solves with a default [`ExhaustiveSolver`]. See
/// [`ExhaustiveSolver::solve`].
pub fn generate_exhaustive(
    groups: &[SubjectGroup],
    preferences: &Preferences,
    constraints: &Constraints,
) -> Result<ScoreBreakdown, Vec<ValidationError>> {
    ExhaustiveSolver::new().solve(groups, preferences, constraints)
}

/// Solves with a default [`BestEffortSolver`]. See
/// [`BestEffortSolver::solve`].
pub fn generate_best_effort<R: Rng>(
    sections: &[CourseSection],
    preferences: &Preferences,
    constraints: &Constraints,
    rng: &mut R,
) -> Result<CandidateSet, Vec<ValidationError>> {
    BestEffortSolver::new().solve(sections, preferences, constraints, rng)
}

/// Scores a completed candidate set.
///
/// Campus days are computed only when day minimization is requested;
/// otherwise the count is reported as 0 and ignored in tie-breaks.
pub(crate) fn score_candidate(
    sections: &[&CourseSection],
    preferences: &Preferences,
) -> ScoreBreakdown {
    ScoreBreakdown {
        schedule: sections.iter().map(|s| (*s).clone()).collect(),
        aggregate_score: aggregate_score(sections),
        time_preference_score: time_preference_score(sections, &preferences.time_of_day_rank),
        campus_day_count: if preferences.minimize_campus_days {
            campus_day_count(sections)
        } else {
            0
        },
    }
}
