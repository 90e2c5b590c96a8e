//! Input validation for rostering problems.
//!
//! Checks structural integrity of a problem before any search runs.
//! Detects:
//! - Empty roster
//! - Duplicate candidate names
//! - Empty unavailability table (no weeks to schedule)
//! - Zero slot width
//! - Names referenced in unavailability or cost tables but absent from
//!   the roster
//!
//! Timeout checks live in [`crate::solver`], which owns the timing
//! configuration; they reuse the same error types.

use crate::models::RosterProblem;
use std::collections::HashSet;

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
    /// The roster contains no candidates.
    EmptyRoster,
    /// Two roster entries share the same name.
    DuplicateCandidate,
    /// The unavailability table is empty, so there is nothing to schedule.
    NoWeeks,
    /// The configured slot width is zero.
    ZeroSlotWidth,
    /// An unavailability set or cost table names a candidate not in the roster.
    UnknownCandidate,
    /// An attempt or global timeout is zero.
    NonPositiveTimeout,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a rostering problem.
///
/// Checks:
/// 1. The roster has at least one candidate
/// 2. No duplicate candidate names
/// 3. At least one week to schedule
/// 4. Slot width is at least one
/// 5. Every name in every unavailability set is a roster member
/// 6. Every cost-table key is a roster member
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &RosterProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.candidates.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster contains no candidates",
        ));
    }

    let mut names = HashSet::new();
    for name in &problem.candidates {
        if !names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCandidate,
                format!("Duplicate candidate name: {name}"),
            ));
        }
    }

    if problem.unavailable.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWeeks,
            "Unavailability table is empty (no weeks to schedule)",
        ));
    }

    if problem.slots_per_week == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroSlotWidth,
            "Slots per week must be at least 1",
        ));
    }

    for (week, set) in problem.unavailable.iter().enumerate() {
        for name in set {
            if !names.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCandidate,
                    format!("Week {week} marks unknown candidate '{name}' unavailable"),
                ));
            }
        }
    }

    for name in problem.extra_cost.keys() {
        if !names.contains(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCandidate,
                format!("Cost table references unknown candidate '{name}'"),
            ));
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
    use std::collections::HashSet;

    fn sample_problem() -> RosterProblem {
        RosterProblem::new(
            vec!["ana".into(), "ben".into(), "cho".into()],
            vec![
                HashSet::new(),
                ["ben".to_string()].into_iter().collect(),
            ],
        )
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_empty_roster() {
        let p = RosterProblem::new(vec![], vec![HashSet::new()]);
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyRoster));
    }

    #[test]
    fn test_duplicate_candidate() {
        let p = RosterProblem::new(
            vec!["ana".into(), "ana".into()],
            vec![HashSet::new()],
        );
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCandidate));
    }

    #[test]
    fn test_no_weeks() {
        let p = RosterProblem::new(vec!["ana".into()], vec![]);
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NoWeeks));
    }

    #[test]
    fn test_zero_slot_width() {
        let p = sample_problem().with_slots_per_week(0);
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroSlotWidth));
    }

    #[test]
    fn test_unknown_unavailable_candidate() {
        let p = RosterProblem::new(
            vec!["ana".into()],
            vec![["ghost".to_string()].into_iter().collect()],
        );
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownCandidate
                && e.message.contains("ghost")));
    }

    #[test]
    fn test_unknown_cost_candidate() {
        let p = sample_problem().with_extra_cost("ghost", 5);
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownCandidate
                && e.message.contains("Cost table")));
    }

    #[test]
    fn test_multiple_errors() {
        let p = RosterProblem::new(vec![], vec![]).with_slots_per_week(0);
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
