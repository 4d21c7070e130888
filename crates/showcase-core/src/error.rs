//! Unified error handling for Showcase Core.
//!
//! Wraps domain and application errors behind one type with
//! user-actionable suggestions. Only construction and the CLI see it;
//! interaction methods never return an error.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Showcase Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShowcaseError {
    /// Site content or settings violate an invariant.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Orchestration failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ShowcaseError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run `showcase check` to validate the site file".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in the showcase layer".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// A failed delivery can be resubmitted as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Delivery { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Delivery,
    Internal,
}

/// Convenient result type alias.
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::DeliveryStage;

    #[test]
    fn domain_categories_carry_through() {
        let err = ShowcaseError::from(DomainError::EmptyGallery);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());

        let err = ShowcaseError::from(DomainError::UnknownProject { index: 9, len: 3 });
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn delivery_failures_are_retryable() {
        let err = ShowcaseError::from(ApplicationError::Delivery {
            stage: DeliveryStage::AutoReply,
            reason: "503".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Delivery);
        assert!(err.is_retryable());
        assert!(err.to_string().contains("stage 2"));
    }
}
