//! Domain value objects: ElementId, Threshold, Breakpoint, ToastKind, PanelState.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! The responsive breakpoint lives here as the single width classifier:
//! both items-per-view and slide width derive from [`Breakpoint`].

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ElementId ────────────────────────────────────────────────────────────────

/// Identifier of a page element (section, counter, reveal container).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ── Threshold ────────────────────────────────────────────────────────────────

/// Visible fraction of an element's area at which a crossing fires.
///
/// Invariant: `0 < value <= 1`. Checked by [`Threshold::try_new`] and by
/// settings validation for values that arrive through serde.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(f32);

impl Threshold {
    pub const fn new_unchecked(value: f32) -> Self {
        Self(value)
    }

    pub fn try_new(field: &str, value: f32) -> Result<Self, DomainError> {
        let threshold = Self(value);
        threshold.validate(field)?;
        Ok(threshold)
    }

    pub fn validate(&self, field: &str) -> Result<(), DomainError> {
        if self.0 > 0.0 && self.0 <= 1.0 {
            Ok(())
        } else {
            Err(DomainError::InvalidThreshold {
                field: field.to_string(),
                value: self.0,
            })
        }
    }

    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Whether a reported intersection ratio counts as a crossing.
    pub fn is_crossed_by(&self, ratio: f32) -> bool {
        ratio >= self.0
    }
}

// ── Breakpoint ───────────────────────────────────────────────────────────────

/// Viewport width upper bounds, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 768.0,
            tablet_max: 1024.0,
        }
    }
}

impl Breakpoints {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.mobile_max < self.tablet_max {
            Ok(())
        } else {
            Err(DomainError::InvalidBreakpoints {
                mobile_max: self.mobile_max,
                tablet_max: self.tablet_max,
            })
        }
    }

    /// Classify a viewport width.
    pub fn classify(&self, viewport_width: f64) -> Breakpoint {
        if viewport_width <= self.mobile_max {
            Breakpoint::Mobile
        } else if viewport_width <= self.tablet_max {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Responsive layout class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Number of project cards visible side by side.
    pub const fn items_per_view(&self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Tablet => 2,
            Self::Desktop => 3,
        }
    }

    /// Width of one card as a percentage of the track.
    pub const fn slide_percentage(&self) -> f64 {
        match self {
            Self::Mobile => 100.0,
            Self::Tablet => 50.0,
            Self::Desktop => 33.3333,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ToastKind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    None,
    Success,
    Error,
}

impl ToastKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PanelState ───────────────────────────────────────────────────────────────

/// Lifecycle of the detail panel overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        }
    }

    /// Whether the overlay is mounted in the page.
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DraftField ───────────────────────────────────────────────────────────────

/// An editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Email,
    Message,
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(DomainError::MissingRequiredField {
                field: "draft field (name, email, message)",
            }),
        }
    }
}

// ── ScrollBehavior ───────────────────────────────────────────────────────────

/// How the host should apply a new scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Instant,
    Smooth,
}
