//! One-shot entrance reveals keyed by element.
//!
//! Each registered target fires at most once per page lifetime. Reports for
//! distinct elements may arrive in any order; each only touches its own
//! entry.

use std::collections::HashSet;

use crate::domain::{
    ElementId, SiteContent, Threshold, interaction::counter::CounterSpec, settings::Thresholds,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RevealKind {
    /// Stagger the container's prose descendants in.
    Prose,
    /// The featured-project block and its content/visual children.
    Featured,
    /// Roll a counter up from zero.
    Counter(CounterSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub element: ElementId,
    pub threshold: Threshold,
    pub kind: RevealKind,
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityRevealController {
    targets: Vec<RevealTarget>,
    revealed: HashSet<ElementId>,
}

impl VisibilityRevealController {
    pub fn new(targets: Vec<RevealTarget>) -> Self {
        Self {
            targets,
            revealed: HashSet::new(),
        }
    }

    /// Register every counter, reveal container, and the featured block.
    pub fn from_site(site: &SiteContent, thresholds: &Thresholds) -> Self {
        let counters = site.counters.iter().map(|spec| RevealTarget {
            element: spec.element.clone(),
            threshold: thresholds.counters,
            kind: RevealKind::Counter(spec.clone()),
        });
        let prose = site.reveal_containers.iter().map(|id| RevealTarget {
            element: id.clone(),
            threshold: thresholds.reveal,
            kind: RevealKind::Prose,
        });
        let featured = site.featured_block.iter().map(|id| RevealTarget {
            element: id.clone(),
            threshold: thresholds.featured,
            kind: RevealKind::Featured,
        });

        Self::new(counters.chain(prose).chain(featured).collect())
    }

    /// Targets still waiting for their first crossing.
    pub fn pending(&self) -> impl Iterator<Item = &RevealTarget> {
        self.targets
            .iter()
            .filter(|t| !self.revealed.contains(&t.element))
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.revealed.contains(element)
    }

    /// Record a visibility report. Returns the target on its first crossing,
    /// `None` for unknown elements, sub-threshold ratios, and repeats.
    pub fn record(&mut self, element: &ElementId, ratio: f32) -> Option<RevealTarget> {
        if self.revealed.contains(element) {
            return None;
        }
        let target = self
            .targets
            .iter()
            .find(|t| &t.element == element && t.threshold.is_crossed_by(ratio))?
            .clone();
        self.revealed.insert(element.clone());
        Some(target)
    }
}
