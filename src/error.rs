//! Error types for ingestion.

use thiserror::Error;

use crate::validation::ValidationError;

/// Why a process set could not be ingested.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input was read but rejected; carries every violation found.
    #[error("input rejected: {}", join_messages(.0))]
    Rejected(Vec<ValidationError>),

    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Violations, if this is a rejection.
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::Rejected(errors) => errors,
            Self::Io(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for IngestError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Rejected(errors)
    }
}

impl From<ValidationError> for IngestError {
    fn from(error: ValidationError) -> Self {
        Self::Rejected(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_rejected_display_lists_all() {
        let err = IngestError::from(vec![
            ValidationError::new(ValidationErrorKind::InvalidBurstTime, "burst 0"),
            ValidationError::new(ValidationErrorKind::InvalidArrivalTime, "arrival -1"),
        ]);
        let text = err.to_string();
        assert!(text.contains("burst 0"));
        assert!(text.contains("arrival -1"));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_io_has_no_violations() {
        let err = IngestError::from(std::io::Error::other("boom"));
        assert!(err.violations().is_empty());
        assert!(err.to_string().contains("boom"));
    }
}
