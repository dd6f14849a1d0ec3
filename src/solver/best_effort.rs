//! Best-effort solver: highest-value conflict-free subset.
//!
//! Any subject may be dropped; each subject contributes at most one
//! section. Small inputs are solved exactly by power-set enumeration;
//! larger inputs fall back to repeated randomized greedy construction,
//! trading optimality for bounded work.
//!
//! Candidates are compared lexicographically: more subjects, then more
//! units, then lower time-preference score, then fewer campus days (only
//! when day minimization is requested).

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::conflict::{conflict_free, sections_conflict};
use crate::constraints::{exceeds_max_gap, exceeds_max_units, total_units};
use crate::models::{CandidateSet, Constraints, CourseSection, Preferences};
use crate::scoring::{campus_day_count, time_preference_score};
use crate::validation::{validate_constraints, ValidationError};

/// Largest input size solved by exact power-set enumeration.
pub const DEFAULT_SUBSET_THRESHOLD: usize = 12;

/// Lexicographic ranking key for a candidate subset.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CoverageKey {
    subjects: usize,
    units: f64,
    time_preference: usize,
    campus_days: usize,
}

impl CoverageKey {
    fn of(sections: &[&CourseSection], preferences: &Preferences) -> Self {
        Self {
            // Subjects are unique within any candidate subset.
            subjects: sections.len(),
            units: total_units(sections),
            time_preference: time_preference_score(sections, &preferences.time_of_day_rank),
            campus_days: if preferences.minimize_campus_days {
                campus_day_count(sections)
            } else {
                0
            },
        }
    }

    /// Whether this key strictly beats `other`. Ties lose, so the first
    /// candidate in enumeration order is kept.
    fn beats(&self, other: &Self, minimize_campus_days: bool) -> bool {
        if self.subjects != other.subjects {
            return self.subjects > other.subjects;
        }
        if self.units != other.units {
            return self.units > other.units;
        }
        if self.time_preference != other.time_preference {
            return self.time_preference < other.time_preference;
        }
        if minimize_campus_days && self.campus_days != other.campus_days {
            return self.campus_days < other.campus_days;
        }
        false
    }
}

/// Subset search over a flat list of eligible sections.
///
/// # Example
///
/// ```
/// use course_scheduler::models::{Constraints, CourseSection, Preferences};
/// use course_scheduler::solver::BestEffortSolver;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let sections = vec![CourseSection::new("1001", "IT 111", "A").with_units("3")];
/// let mut rng = SmallRng::seed_from_u64(7);
/// let picked = BestEffortSolver::new()
///     .solve(&sections, &Preferences::new(), &Constraints::unbounded(), &mut rng)
///     .unwrap();
/// assert_eq!(picked.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BestEffortSolver {
    subset_threshold: usize,
}

impl BestEffortSolver {
    /// Creates a solver with the default subset threshold.
    pub fn new() -> Self {
        Self {
            subset_threshold: DEFAULT_SUBSET_THRESHOLD,
        }
    }

    /// Overrides the exact/heuristic cutoff. Must stay below 64 (the
    /// exact path enumerates subsets as a u64 bitmask); raising it much
    /// past the default makes the 2^n scan explode anyway.
    pub fn with_subset_threshold(mut self, threshold: usize) -> Self {
        self.subset_threshold = threshold;
        self
    }

    /// Finds the highest-value admissible subset.
    ///
    /// Inputs at or below the threshold are solved exactly and
    /// deterministically; larger inputs use the randomized greedy path,
    /// whose result depends on `rng`. Returns an empty set when nothing
    /// is admissible (including empty input). Fails only on contract
    /// violations in `constraints`.
    pub fn solve<R: Rng>(
        &self,
        sections: &[CourseSection],
        preferences: &Preferences,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<CandidateSet, Vec<ValidationError>> {
        validate_constraints(constraints)?;
        if sections.len() <= self.subset_threshold {
            Ok(self.solve_subset(sections, preferences, constraints))
        } else {
            Ok(self.solve_greedy(sections, preferences, constraints, rng))
        }
    }

    /// Exact path: full power-set enumeration.
    ///
    /// Exposed so the two paths can be compared on the same input.
    /// Assumes constraints already validated.
    pub fn solve_subset(
        &self,
        sections: &[CourseSection],
        preferences: &Preferences,
        constraints: &Constraints,
    ) -> CandidateSet {
        let n = sections.len();
        let mut best: Option<(CoverageKey, Vec<&CourseSection>)> = None;

        for mask in 1u64..(1u64 << n) {
            let mut subset: Vec<&CourseSection> = Vec::new();
            let mut subjects: HashSet<&str> = HashSet::new();
            let mut duplicate_subject = false;
            for (i, s) in sections.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    if !subjects.insert(s.subject_code.as_str()) {
                        duplicate_subject = true;
                        break;
                    }
                    subset.push(s);
                }
            }
            if duplicate_subject
                || !conflict_free(&subset)
                || exceeds_max_units(&subset, &constraints.max_units)
                || exceeds_max_gap(&subset, &constraints.max_gap_hours)
            {
                continue;
            }

            let key = CoverageKey::of(&subset, preferences);
            if best
                .as_ref()
                .map_or(true, |(b, _)| key.beats(b, preferences.minimize_campus_days))
            {
                best = Some((key, subset));
            }
        }

        best.map(|(_, subset)| subset.into_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Heuristic path: repeated randomized greedy construction.
    ///
    /// Runs `min(500, max(50, 2n))` attempts; each shuffles the pool and
    /// repeatedly takes the admissible candidate with the highest
    /// `units + jitter` priority. Sections of an already-used subject
    /// are filtered out entirely, so the greedy step only ever weighs
    /// genuinely new subjects against each other. Not deterministic
    /// across runs unless `rng` is seeded. Assumes constraints already
    /// validated.
    pub fn solve_greedy<R: Rng>(
        &self,
        sections: &[CourseSection],
        preferences: &Preferences,
        constraints: &Constraints,
        rng: &mut R,
    ) -> CandidateSet {
        if sections.is_empty() {
            return Vec::new();
        }

        let attempts = 500.min(50.max(2 * sections.len()));
        let mut best: Option<(CoverageKey, Vec<&CourseSection>)> = None;

        for _ in 0..attempts {
            let mut pool: Vec<&CourseSection> = sections.iter().collect();
            pool.shuffle(rng);

            let mut chosen: Vec<&CourseSection> = Vec::new();
            let mut used_subjects: HashSet<&str> = HashSet::new();

            loop {
                let mut pick: Option<(usize, f64)> = None;
                for (i, &candidate) in pool.iter().enumerate() {
                    if used_subjects.contains(candidate.subject_code.as_str()) {
                        continue;
                    }
                    if chosen.iter().any(|c| sections_conflict(c, candidate)) {
                        continue;
                    }
                    chosen.push(candidate);
                    let within_limits = !exceeds_max_units(&chosen, &constraints.max_units)
                        && !exceeds_max_gap(&chosen, &constraints.max_gap_hours);
                    chosen.pop();
                    if !within_limits {
                        continue;
                    }
                    // Jitter breaks exact unit ties differently across attempts.
                    let priority = candidate.units() + rng.random_range(0.0..0.1);
                    if pick.map_or(true, |(_, p)| priority > p) {
                        pick = Some((i, priority));
                    }
                }

                match pick {
                    Some((i, _)) => {
                        let candidate = pool.swap_remove(i);
                        used_subjects.insert(candidate.subject_code.as_str());
                        chosen.push(candidate);
                    }
                    None => break,
                }
            }

            let key = CoverageKey::of(&chosen, preferences);
            if best
                .as_ref()
                .map_or(true, |(b, _)| key.beats(b, preferences.minimize_campus_days))
            {
                best = Some((key, chosen));
            }
        }

        best.map(|(_, chosen)| chosen.into_iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for BestEffortSolver {
    fn default() -> Self {
        Self::new()
    }
}
