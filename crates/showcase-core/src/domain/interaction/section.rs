//! Which top-level section occupies the viewport.
//!
//! Last crossing processed wins; there is no area-based tie-break.

use tracing::debug;

use crate::domain::{CtaLabels, ElementId, Threshold};

#[derive(Debug, Clone)]
pub struct SectionActivityTracker {
    sections: Vec<ElementId>,
    threshold: Threshold,
    labels: CtaLabels,
    active: Option<ElementId>,
    cta_label: String,
}

impl SectionActivityTracker {
    pub fn new(sections: Vec<ElementId>, threshold: Threshold, labels: CtaLabels) -> Self {
        let cta_label = labels.default.clone();
        Self {
            sections,
            threshold,
            labels,
            active: None,
            cta_label,
        }
    }

    pub fn sections(&self) -> &[ElementId] {
        &self.sections
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn tracks(&self, element: &ElementId) -> bool {
        self.sections.contains(element)
    }

    pub fn active(&self) -> Option<&ElementId> {
        self.active.as_ref()
    }

    pub fn cta_label(&self) -> &str {
        &self.cta_label
    }

    /// Record a visibility report. Returns `true` if it counted as a crossing.
    pub fn record(&mut self, section: &ElementId, ratio: f32) -> bool {
        if !self.tracks(section) || !self.threshold.is_crossed_by(ratio) {
            return false;
        }
        self.cta_label = self.labels.label_for(section).to_string();
        self.active = Some(section.clone());
        debug!(section = %section, cta = %self.cta_label, "Active section changed");
        true
    }
}
