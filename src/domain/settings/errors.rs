//! Settings-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by settings operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Actor lacks admin rights. Nothing was changed.
    PermissionDenied,
    /// Input outside its contract.
    ValidationFailed(ValidationError),
    /// Selected channel cannot receive text messages.
    NotTextChannel,
    /// The settings store rejected the write.
    StorageFailure(String),
}

impl SettingsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SettingsError::PermissionDenied => ErrorCode::Forbidden,
            SettingsError::ValidationFailed(_) | SettingsError::NotTextChannel => {
                ErrorCode::ValidationFailed
            }
            SettingsError::StorageFailure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SettingsError::PermissionDenied => "Permission denied".to_string(),
            SettingsError::ValidationFailed(err) => format!("Validation failed: {}", err),
            SettingsError::NotTextChannel => "Channel is not text-based".to_string(),
            SettingsError::StorageFailure(msg) => format!("Storage failure: {}", msg),
        }
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SettingsError {}

impl From<ValidationError> for SettingsError {
    fn from(err: ValidationError) -> Self {
        SettingsError::ValidationFailed(err)
    }
}

impl From<DomainError> for SettingsError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => SettingsError::PermissionDenied,
            _ => SettingsError::StorageFailure(err.to_string()),
        }
    }
}
