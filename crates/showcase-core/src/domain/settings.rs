//! Tunables for the interaction layer.
//!
//! Every constant the controller relies on is carried here so the host can
//! override it from a site file. `Default` reproduces the stock behaviour.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Breakpoints, DomainError, ElementId, Threshold};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub counter: CounterTiming,
    pub toast_lifetime_ms: u64,
    pub drag_hint_lifetime_ms: u64,
    pub drag: DragSettings,
    pub thresholds: Thresholds,
    pub breakpoints: Breakpoints,
    pub labels: CtaLabels,
    pub messages: ToastMessages,
    pub delivery: DeliverySettings,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            counter: CounterTiming::default(),
            toast_lifetime_ms: 3_500,
            drag_hint_lifetime_ms: 4_000,
            drag: DragSettings::default(),
            thresholds: Thresholds::default(),
            breakpoints: Breakpoints::default(),
            labels: CtaLabels::default(),
            messages: ToastMessages::default(),
            delivery: DeliverySettings::default(),
        }
    }
}

impl InteractionSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        self.counter.validate()?;
        if self.toast_lifetime_ms == 0 {
            return Err(DomainError::InvalidTiming {
                field: "toast_lifetime_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if !(self.drag.amplification.is_finite() && self.drag.amplification > 0.0) {
            return Err(DomainError::InvalidTiming {
                field: "drag.amplification",
                reason: format!("must be a positive factor, got {}", self.drag.amplification),
            });
        }
        if !(self.drag.card_gap.is_finite() && self.drag.card_gap >= 0.0) {
            return Err(DomainError::InvalidTiming {
                field: "drag.card_gap",
                reason: format!("must be non-negative, got {}", self.drag.card_gap),
            });
        }
        self.thresholds.validate()?;
        self.breakpoints.validate()
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }

    pub fn drag_hint_lifetime(&self) -> Duration {
        Duration::from_millis(self.drag_hint_lifetime_ms)
    }
}

/// Counter roll-up pacing: `target / (duration_ms / tick_ms)` per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterTiming {
    pub duration_ms: u64,
    pub tick_ms: u64,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration_ms: 1_800,
            tick_ms: 30,
        }
    }
}

impl CounterTiming {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tick_ms == 0 {
            return Err(DomainError::InvalidTiming {
                field: "counter.tick_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.duration_ms < self.tick_ms {
            return Err(DomainError::InvalidTiming {
                field: "counter.duration_ms",
                reason: format!("must be at least one tick ({} ms)", self.tick_ms),
            });
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Number of ticks a full roll-up takes.
    pub fn steps(&self) -> f64 {
        self.duration_ms as f64 / self.tick_ms as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Pointer travel multiplier while dragging.
    pub amplification: f64,
    /// Layout gap between cards, in the same units as card width.
    pub card_gap: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            amplification: 1.2,
            card_gap: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub counters: Threshold,
    pub sections: Threshold,
    pub reveal: Threshold,
    pub featured: Threshold,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            counters: Threshold::new_unchecked(0.6),
            sections: Threshold::new_unchecked(0.6),
            reveal: Threshold::new_unchecked(0.25),
            featured: Threshold::new_unchecked(0.2),
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), DomainError> {
        self.counters.validate("counters")?;
        self.sections.validate("sections")?;
        self.reveal.validate("reveal")?;
        self.featured.validate("featured")
    }
}

/// Call-to-action copy keyed by the active section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaLabels {
    pub default: String,
    pub by_section: BTreeMap<String, String>,
}

impl Default for CtaLabels {
    fn default() -> Self {
        let mut by_section = BTreeMap::new();
        by_section.insert("projects".to_string(), "Want something like this?".to_string());
        by_section.insert("contact".to_string(), "Send me a message".to_string());
        Self {
            default: "Let's talk about your idea".to_string(),
            by_section,
        }
    }
}

impl CtaLabels {
    pub fn label_for(&self, section: &ElementId) -> &str {
        self.by_section
            .get(section.as_str())
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastMessages {
    pub success: String,
    pub error: String,
}

impl Default for ToastMessages {
    fn default() -> Self {
        Self {
            success: "Message sent. I'll get back to you soon.".to_string(),
            error: "Could not send the message. Please try again.".to_string(),
        }
    }
}

/// Identifiers handed to the delivery transport for both stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverySettings {
    pub service_id: String,
    /// Stage 1: notification to the site owner.
    pub notify_template_id: String,
    /// Stage 2: auto-reply to the visitor.
    pub autoreply_template_id: String,
    pub public_key: String,
}
