//! Input validation for process sets.
//!
//! Checks every ingested row before any record is built. Detects:
//! - Empty process lists / non-positive process counts
//! - Negative arrival times
//! - Non-positive burst times
//!
//! Parsers report `MalformedInput` through the same error type, so callers
//! see one list of problems regardless of where they were found.
//!
//! All violations are collected; validation never stops at the first one.

use thiserror::Error;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending field and value.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Process count is zero or negative.
    InvalidProcessCount,
    /// A burst time is zero or negative.
    InvalidBurstTime,
    /// An arrival time is negative.
    InvalidArrivalTime,
    /// A field is missing or not an integer.
    MalformedInput,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn process_count(count: i64) -> Self {
        Self::new(
            ValidationErrorKind::InvalidProcessCount,
            format!("Invalid process count: {count} (must be at least 1)"),
        )
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::MalformedInput, message)
    }
}

/// Validates raw process rows.
///
/// Checks:
/// 1. At least one row
/// 2. Every `arrival_time >= 0`
/// 3. Every `burst_time >= 1`
///
/// Ids are not checked; duplicates are allowed.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_specs(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if specs.is_empty() {
        errors.push(ValidationError::process_count(0));
    }

    for (pos, spec) in specs.iter().enumerate() {
        if spec.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process #{} (id {}): invalid arrival time {} (must be >= 0)",
                    pos + 1,
                    spec.id,
                    spec.arrival_time
                ),
            ));
        }

        if spec.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Process #{} (id {}): invalid burst time {} (must be >= 1)",
                    pos + 1,
                    spec.id,
                    spec.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a declared process count.
pub fn validate_count(count: i64) -> ValidationResult {
    if count <= 0 {
        Err(vec![ValidationError::process_count(count)])
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_specs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 0, 8),
            ProcessSpec::new(2, 1, 4),
            ProcessSpec::new(3, 2, 9),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_specs(&sample_specs()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_specs(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcessCount);
    }

    #[test]
    fn test_zero_burst() {
        let specs = vec![ProcessSpec::new(1, 0, 0)];
        let errors = validate_specs(&specs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_negative_arrival() {
        let specs = vec![ProcessSpec::new(9, -3, 2)];
        let errors = validate_specs(&specs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrivalTime);
        assert!(errors[0].message.contains("-3"));
        assert!(errors[0].message.contains("id 9"));
    }

    #[test]
    fn test_duplicate_ids_allowed() {
        let specs = vec![ProcessSpec::new(1, 0, 1), ProcessSpec::new(1, 0, 1)];
        assert!(validate_specs(&specs).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let specs = vec![
            ProcessSpec::new(1, -1, 0), // both fields bad
            ProcessSpec::new(2, 0, -5),
        ];
        let errors = validate_specs(&specs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(0).is_err());
        let errors = validate_count(-2).unwrap_err();
        assert!(errors[0].message.contains("-2"));
    }
}
