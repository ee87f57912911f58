//! Unified error handling for Cardsmith Core.
//!
//! Wraps domain and application errors with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Cardsmith Core operations.
#[derive(Debug, Error, Clone)]
pub enum CardsmithError {
    /// Errors from the domain layer (validation, lookups).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage, serialization).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CardsmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Storage,
}

/// Convenient result type alias.
pub type CardsmithResult<T> = Result<T, CardsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_not_found_maps_through() {
        let err: CardsmithError = DomainError::ProjectNotFound { id: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn lock_errors_are_storage_errors() {
        let err: CardsmithError = ApplicationError::StoreLockError.into();
        assert_eq!(err.category(), ErrorCategory::Storage);
    }
}
