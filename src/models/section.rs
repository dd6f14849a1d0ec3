//! Course section model.
//!
//! A section is one specific offering of a subject, with its own meeting
//! pattern and identity. At most one section per subject may appear in a
//! valid schedule.

use serde::{Deserialize, Serialize};

use super::pattern::ParsedSchedule;

/// One offering of a subject.
///
/// Identity is the triple (id, subject_code, section). The engine never
/// mutates a section; candidate sets clone sections out of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Catalog identifier (e.g., class number).
    pub id: String,
    /// Subject code (e.g., "IT 111").
    pub subject_code: String,
    /// Section label (e.g., "A").
    pub section: String,
    /// Credit units as listed in the catalog. Kept raw; unparseable
    /// values count as 0 units rather than erroring.
    pub credit_units: String,
    /// Course title, if known.
    pub title: Option<String>,
    /// Weekly meeting schedule.
    pub schedule: ParsedSchedule,
}

impl CourseSection {
    /// Creates a section with a TBA schedule and no units.
    pub fn new(
        id: impl Into<String>,
        subject_code: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject_code: subject_code.into(),
            section: section.into(),
            credit_units: String::new(),
            title: None,
            schedule: ParsedSchedule::tba(),
        }
    }

    /// Sets the credit units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.credit_units = units.into();
        self
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the schedule.
    pub fn with_schedule(mut self, schedule: ParsedSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Numeric credit units; unparseable values count as 0.
    pub fn units(&self) -> f64 {
        self.credit_units.trim().parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_parsing() {
        let s = CourseSection::new("1001", "IT 111", "A").with_units("3");
        assert_eq!(s.units(), 3.0);

        let s = CourseSection::new("1002", "IT 111", "B").with_units(" 1.5 ");
        assert_eq!(s.units(), 1.5);
    }

    #[test]
    fn test_unparseable_units_are_zero() {
        let s = CourseSection::new("1003", "PE 1", "A").with_units("(2)");
        assert_eq!(s.units(), 0.0);
        let s = CourseSection::new("1004", "PE 1", "B");
        assert_eq!(s.units(), 0.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = CourseSection::new("1001", "IT 111", "A")
            .with_units("3")
            .with_title("Intro to Computing");
        let json = serde_json::to_string(&s).unwrap();
        let back: CourseSection = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
