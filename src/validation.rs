//! Input validation for scheduling requests and catalogs.
//!
//! The engine itself degrades gracefully on malformed data (TBA slots,
//! unparseable units, bad time strings) — the only caller-visible
//! failures are programming-contract violations in the request, which
//! fail fast here rather than being silently clamped. Catalog checks
//! are offered separately for upstream ingestion code.

use std::collections::HashSet;

use crate::models::{Constraints, CourseSection, Limit};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A bounded limit is negative.
    NegativeLimit,
    /// A bounded limit is NaN or infinite.
    NonFiniteLimit,
    /// Two sections share the same (id, subject, section) identity.
    DuplicateSection,
    /// A slot ends at or before it starts.
    InvertedTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the hard limits of a scheduling request.
///
/// A bounded limit must be finite and non-negative; anything else is a
/// misconfigured caller, not unsatisfiable scheduling data. Both solver
/// entry points call this before searching.
pub fn validate_constraints(constraints: &Constraints) -> ValidationResult {
    let mut errors = Vec::new();
    check_limit(&constraints.max_units, "max_units", &mut errors);
    check_limit(&constraints.max_gap_hours, "max_gap_hours", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_limit(limit: &Limit, name: &str, errors: &mut Vec<ValidationError>) {
    if let Limit::Bounded(value) = limit {
        if !value.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteLimit,
                format!("{name} must be finite, got {value}"),
            ));
        } else if *value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeLimit,
                format!("{name} must be non-negative, got {value}"),
            ));
        }
    }
}

/// Validates catalog integrity before scheduling.
///
/// Checks:
/// 1. No duplicate (id, subject_code, section) identities
/// 2. No slot with end <= start
///
/// The solvers do not call this; it exists for ingestion-side checks
/// where surfacing bad input beats degrading silently.
pub fn validate_catalog(sections: &[CourseSection]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut identities = HashSet::new();
    for s in sections {
        if !identities.insert((s.id.as_str(), s.subject_code.as_str(), s.section.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSection,
                format!("Duplicate section: {} {} {}", s.id, s.subject_code, s.section),
            ));
        }

        for slot in &s.schedule.slots {
            if let (Some(start), Some(end)) = (slot.start, slot.end) {
                if end <= start {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedTimeRange,
                        format!(
                            "Section {} {} has a slot ending at or before it starts ({start}-{end})",
                            s.subject_code, s.section
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MeetingPattern, ParsedSchedule, WallTime, Weekday};

    #[test]
    fn test_unbounded_constraints_are_valid() {
        assert!(validate_constraints(&Constraints::unbounded()).is_ok());
    }

    #[test]
    fn test_valid_bounded_constraints() {
        let c = Constraints::unbounded()
            .with_max_units(21.0)
            .with_max_gap_hours(0.0);
        assert!(validate_constraints(&c).is_ok());
    }

    #[test]
    fn test_negative_limit_fails() {
        let c = Constraints::unbounded().with_max_units(-1.0);
        let errors = validate_constraints(&c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeLimit));
    }

    #[test]
    fn test_non_finite_limit_fails() {
        let c = Constraints::unbounded().with_max_gap_hours(f64::NAN);
        let errors = validate_constraints(&c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFiniteLimit));
    }

    #[test]
    fn test_multiple_limit_errors() {
        let c = Constraints::unbounded()
            .with_max_units(-3.0)
            .with_max_gap_hours(f64::INFINITY);
        let errors = validate_constraints(&c).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_duplicate_section_identity() {
        let sections = vec![
            CourseSection::new("1001", "IT 111", "A"),
            CourseSection::new("1001", "IT 111", "A"),
        ];
        let errors = validate_catalog(&sections).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSection));
    }

    #[test]
    fn test_same_id_different_section_is_fine() {
        let sections = vec![
            CourseSection::new("1001", "IT 111", "A"),
            CourseSection::new("1001", "IT 111", "B"),
        ];
        assert!(validate_catalog(&sections).is_ok());
    }

    #[test]
    fn test_inverted_time_range() {
        let bad = CourseSection::new("1001", "IT 111", "A").with_schedule(
            ParsedSchedule::from_slots(vec![MeetingPattern::new(vec![Weekday::Mon]).with_time(
                WallTime::parse("09:00").unwrap(),
                WallTime::parse("07:30").unwrap(),
            )]),
        );
        let errors = validate_catalog(&[bad]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedTimeRange));
    }
}
