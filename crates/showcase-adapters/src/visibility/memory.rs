//! In-memory visibility watcher for headless runs.

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

use showcase_core::{
    application::ports::VisibilityWatcher,
    domain::{ElementId, Threshold},
};
use tracing::trace;

/// Keeps the current set of observed elements and their thresholds.
#[derive(Debug, Clone, Default)]
pub struct MemoryVisibility {
    inner: Arc<RwLock<BTreeMap<ElementId, Vec<Threshold>>>>,
}

impl MemoryVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observed(&self, element: &ElementId) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(element)
    }

    pub fn thresholds(&self, element: &ElementId) -> Option<Vec<Threshold>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(element)
            .cloned()
    }

    /// Observed element ids in sorted order.
    pub fn observed(&self) -> Vec<ElementId> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl VisibilityWatcher for MemoryVisibility {
    fn observe(&self, element: &ElementId, thresholds: &[Threshold]) {
        trace!(%element, count = thresholds.len(), "Observe");
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(element.clone(), thresholds.to_vec());
    }

    fn unobserve(&self, element: &ElementId) {
        trace!(%element, "Unobserve");
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_then_unobserve() {
        let watcher = MemoryVisibility::new();
        let id = ElementId::from("stat-years");
        watcher.observe(&id, &[Threshold::new_unchecked(0.6)]);
        assert!(watcher.is_observed(&id));
        assert_eq!(
            watcher.thresholds(&id),
            Some(vec![Threshold::new_unchecked(0.6)])
        );

        watcher.unobserve(&id);
        assert!(watcher.observed().is_empty());
    }
}
