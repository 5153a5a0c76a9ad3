//! Review-flow error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::ReviewStep;

/// Errors raised while advancing a review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// No session (or no data from an earlier step) for this user in this guild.
    SessionExpired,
    /// The input belongs to a step the session has already moved past.
    StepAlreadyCompleted { expected: ReviewStep, actual: ReviewStep },
    /// Input outside its contract.
    ValidationFailed { field: String, message: String },
    /// The guild has no products to choose from.
    CatalogEmpty,
    /// Persisting the finished review failed.
    StorageFailure(String),
}

impl ReviewError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReviewError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        ReviewError::StorageFailure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReviewError::SessionExpired => ErrorCode::SessionExpired,
            ReviewError::StepAlreadyCompleted { .. } => ErrorCode::InvalidStateTransition,
            ReviewError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReviewError::CatalogEmpty => ErrorCode::CatalogEmpty,
            ReviewError::StorageFailure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReviewError::SessionExpired => "Review session expired".to_string(),
            ReviewError::StepAlreadyCompleted { expected, actual } => format!(
                "The {} step is already done (session is at the {} step)",
                expected, actual
            ),
            ReviewError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ReviewError::CatalogEmpty => "No products configured".to_string(),
            ReviewError::StorageFailure(msg) => format!("Storage failure: {}", msg),
        }
    }
}

impl std::fmt::Display for ReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReviewError {}

impl From<ValidationError> for ReviewError {
    fn from(err: ValidationError) -> Self {
        ReviewError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ReviewError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionExpired => ReviewError::SessionExpired,
            ErrorCode::CatalogEmpty => ReviewError::CatalogEmpty,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ReviewError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ReviewError::StorageFailure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_with_field() {
        let err: ReviewError = ValidationError::out_of_range("rating", 1, 5, 0).into();
        match err {
            ReviewError::ValidationFailed { field, .. } => assert_eq!(field, "rating"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn database_error_becomes_storage_failure() {
        let err: ReviewError = DomainError::new(ErrorCode::DatabaseError, "down").into();
        assert!(matches!(err, ReviewError::StorageFailure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn step_already_completed_names_both_steps() {
        let err = ReviewError::StepAlreadyCompleted {
            expected: ReviewStep::Comment,
            actual: ReviewStep::Product,
        };
        assert_eq!(
            err.to_string(),
            "The comment step is already done (session is at the product step)"
        );
    }
}
