//! Exhaustive backtracking solver: one section per subject, or nothing.
//!
//! Subjects are processed in input order and each subject's candidates
//! in catalog order, so results are deterministic for a fixed input. A
//! subject whose candidates all conflict with the partial assignment
//! kills that branch; subjects are never skipped.

use crate::conflict::{conflict_free, sections_conflict};
use crate::constraints::{exceeds_max_gap, exceeds_max_units};
use crate::models::{Constraints, CourseSection, Preferences, ScoreBreakdown};
use crate::validation::{validate_constraints, ValidationError};

use super::score_candidate;

/// A subject's candidate sections, in catalog order.
#[derive(Debug, Clone)]
pub struct SubjectGroup {
    /// Subject code (e.g., "IT 111").
    pub subject_code: String,
    /// Candidate sections for the subject.
    pub sections: Vec<CourseSection>,
}

impl SubjectGroup {
    /// Creates a subject group.
    pub fn new(subject_code: impl Into<String>, sections: Vec<CourseSection>) -> Self {
        Self {
            subject_code: subject_code.into(),
            sections,
        }
    }
}

/// Backtracking search requiring every subject to be represented.
///
/// Worst-case complexity is the product of candidate counts across
/// subjects; the caller is responsible for only invoking this when that
/// product is tractable (a size threshold decided before calling, not a
/// cancellation check inside the loop).
///
/// # Example
///
/// ```
/// use course_scheduler::models::{Constraints, CourseSection, Preferences};
/// use course_scheduler::solver::{ExhaustiveSolver, SubjectGroup};
///
/// let groups = vec![SubjectGroup::new(
///     "IT 111",
///     vec![CourseSection::new("1001", "IT 111", "A").with_units("3")],
/// )];
/// let result = ExhaustiveSolver::new()
///     .solve(&groups, &Preferences::new(), &Constraints::unbounded())
///     .unwrap();
/// assert_eq!(result.schedule.len(), 1);
/// assert_eq!(result.aggregate_score, 103.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Finds the best complete assignment, one section per subject.
    ///
    /// Returns [`ScoreBreakdown::empty`] (score 0) when no complete
    /// conflict-free, constraint-satisfying assignment exists. Fails
    /// only on contract violations in `constraints`.
    pub fn solve(
        &self,
        groups: &[SubjectGroup],
        preferences: &Preferences,
        constraints: &Constraints,
    ) -> Result<ScoreBreakdown, Vec<ValidationError>> {
        validate_constraints(constraints)?;

        let mut best: Option<ScoreBreakdown> = None;
        let mut chosen: Vec<&CourseSection> = Vec::with_capacity(groups.len());
        Self::descend(groups, 0, &mut chosen, preferences, constraints, &mut best);
        Ok(best.unwrap_or_else(ScoreBreakdown::empty))
    }

    fn descend<'a>(
        groups: &'a [SubjectGroup],
        depth: usize,
        chosen: &mut Vec<&'a CourseSection>,
        preferences: &Preferences,
        constraints: &Constraints,
        best: &mut Option<ScoreBreakdown>,
    ) {
        if depth == groups.len() {
            // Defensive full re-check of the completed assignment.
            if !conflict_free(chosen)
                || exceeds_max_units(chosen, &constraints.max_units)
                || exceeds_max_gap(chosen, &constraints.max_gap_hours)
            {
                return;
            }
            let candidate = score_candidate(chosen, preferences);
            let replace = match best {
                None => true,
                Some(incumbent) => {
                    improves_on(&candidate, incumbent, preferences.minimize_campus_days)
                }
            };
            if replace {
                *best = Some(candidate);
            }
            return;
        }

        for candidate in &groups[depth].sections {
            // Only the new candidate needs checking against the partial
            // set; earlier pairs were checked on their way in.
            if chosen.iter().all(|c| !sections_conflict(c, candidate)) {
                chosen.push(candidate);
                Self::descend(groups, depth + 1, chosen, preferences, constraints, best);
                chosen.pop();
            }
        }
    }
}

/// Whether `a` strictly beats the incumbent `b`.
///
/// With day minimization: fewer campus days, then higher aggregate
/// score, then lower time-preference score. Without: higher aggregate
/// score, then lower time-preference score. Exact ties keep the
/// incumbent, so the first solution in exploration order wins.
fn improves_on(a: &ScoreBreakdown, b: &ScoreBreakdown, minimize_campus_days: bool) -> bool {
    if minimize_campus_days && a.campus_day_count != b.campus_day_count {
        return a.campus_day_count < b.campus_day_count;
    }
    if a.aggregate_score != b.aggregate_score {
        return a.aggregate_score > b.aggregate_score;
    }
    a.time_preference_score < b.time_preference_score
}
