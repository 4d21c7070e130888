// ============================================================================
// domain/error.rs - CONFIGURATION INVARIANTS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors only arise while loading and validating site content.
/// Once a controller exists, interaction methods never return them: invalid
/// input at interaction time degrades to a silent no-op.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Content Errors
    // ========================================================================
    #[error("Project list is empty")]
    EmptyProjects,

    #[error("Gallery image list is empty")]
    EmptyGallery,

    #[error("Featured project index {index} is out of range (have {len} projects)")]
    UnknownProject { index: usize, len: usize },

    #[error("Duplicate element id: {id}")]
    DuplicateElement { id: String },

    // ========================================================================
    // Tuning Errors
    // ========================================================================
    #[error("Visibility threshold for '{field}' must be in (0, 1], got {value}")]
    InvalidThreshold { field: String, value: f32 },

    #[error("Timing '{field}' is invalid: {reason}")]
    InvalidTiming { field: &'static str, reason: String },

    #[error("Breakpoints are not ascending: mobile {mobile_max} >= tablet {tablet_max}")]
    InvalidBreakpoints { mobile_max: f64, tablet_max: f64 },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjects => vec![
                "Add at least one [[projects]] entry to the site file".into(),
                "The carousel and paginator need something to show".into(),
            ],
            Self::EmptyGallery => vec![
                "Add at least one [[gallery]] image to the site file".into(),
                "The detail panel browses this list cyclically".into(),
            ],
            Self::UnknownProject { len, .. } => vec![
                format!("featured_project must be between 0 and {}", len.saturating_sub(1)),
            ],
            Self::DuplicateElement { id } => vec![
                format!("Element id '{id}' is registered twice"),
                "Give every section, counter, and reveal container a unique id".into(),
            ],
            Self::InvalidThreshold { field, .. } => vec![
                format!("Set thresholds.{field} to a fraction such as 0.6"),
            ],
            Self::InvalidBreakpoints { .. } => vec![
                "mobile_max must be smaller than tablet_max (defaults: 768 and 1024)".into(),
            ],
            _ => vec!["See the sample site file for valid values".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjects | Self::EmptyGallery | Self::DuplicateElement { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownProject { .. } => ErrorCategory::NotFound,
            Self::InvalidThreshold { .. }
            | Self::InvalidTiming { .. }
            | Self::InvalidBreakpoints { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
}
