//! Application layer errors.
//!
//! These errors represent failures in orchestration, not content. Content
//! errors are `DomainError` from `crate::domain`. None of them escape an
//! interaction method: the controller turns them into a toast or a log line.

use std::fmt;

use thiserror::Error;

use crate::error::ErrorCategory;

/// One of the two sequential contact deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStage {
    /// Notification to the site owner.
    Notify,
    /// Auto-reply to the visitor.
    AutoReply,
}

impl DeliveryStage {
    pub const fn number(&self) -> u8 {
        match self {
            Self::Notify => 1,
            Self::AutoReply => 2,
        }
    }
}

impl fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notify => f.write_str("stage 1 (notify)"),
            Self::AutoReply => f.write_str("stage 2 (auto-reply)"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A delivery stage was rejected by the transport.
    #[error("Delivery failed at {stage}: {reason}")]
    Delivery { stage: DeliveryStage, reason: String },

    /// The animation engine dropped a handle without completing it.
    #[error("Animation '{name}' was dropped before completing")]
    AnimationInterrupted { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Delivery { stage, .. } => vec![
                format!("The message transport rejected {stage}"),
                "Check delivery.service_id, template ids, and public_key".into(),
                "The draft was kept; submitting again retries both stages".into(),
            ],
            Self::AnimationInterrupted { .. } => {
                vec!["The animation engine shut down mid-transition".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Delivery { .. } => ErrorCategory::Delivery,
            Self::AnimationInterrupted { .. } => ErrorCategory::Internal,
        }
    }
}
