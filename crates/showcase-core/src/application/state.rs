//! The single owned interaction state and its rendered projection.
//!
//! Every component lives inside one [`InteractionState`] behind one lock.
//! Each action takes the lock, mutates, and releases it before any await,
//! so no mutation is ever split across a suspension point.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::domain::{
    Breakpoint, ContactDraft, DomainError, DragScrollCarousel, ElementId,
    GalleryImage, ImageCarousel, InteractionSettings, ModalPanel, PanelState, ProjectPaginator,
    ScrollBehavior, SectionActivityTracker, SiteContent, ToastNotifier, ToastState,
    VisibilityRevealController,
};

#[derive(Debug)]
pub struct InteractionState {
    pub(crate) carousel: DragScrollCarousel,
    pub(crate) scroll_behavior: ScrollBehavior,
    pub(crate) paginator: ProjectPaginator,
    pub(crate) panel: ModalPanel,
    pub(crate) gallery: ImageCarousel,
    pub(crate) sections: SectionActivityTracker,
    pub(crate) reveals: VisibilityRevealController,
    pub(crate) toast: ToastNotifier,
    pub(crate) draft: ContactDraft,
    /// Only mutual-exclusion flag: guards the submission pipeline.
    pub(crate) busy: bool,
    pub(crate) counter_text: BTreeMap<ElementId, String>,
    pub(crate) mounted: bool,
}

impl InteractionState {
    pub fn new(site: &SiteContent, settings: &InteractionSettings) -> Result<Self, DomainError> {
        // Until the host reports a width, lay out for the widest class.
        let initial_width = settings.breakpoints.tablet_max + 1.0;

        let counter_text = site
            .counters
            .iter()
            .map(|spec| (spec.element.clone(), spec.initial_text()))
            .collect();

        Ok(Self {
            carousel: DragScrollCarousel::new(&settings.drag),
            scroll_behavior: ScrollBehavior::Instant,
            paginator: ProjectPaginator::new(
                site.projects.len(),
                initial_width,
                settings.breakpoints,
            )?,
            panel: ModalPanel::new(),
            gallery: ImageCarousel::new(site.gallery.clone())?,
            sections: SectionActivityTracker::new(
                site.sections.clone(),
                settings.thresholds.sections,
                settings.labels.clone(),
            ),
            reveals: VisibilityRevealController::from_site(site, &settings.thresholds),
            toast: ToastNotifier::new(),
            draft: ContactDraft::default(),
            busy: false,
            counter_text,
            mounted: false,
        })
    }

    /// Project the current state onto the fields the template renders.
    pub fn view(&self) -> ViewModel {
        let carousel = self.carousel.state();
        let cursor = self.paginator.cursor();
        ViewModel {
            active_section_id: self.sections.active().map(|id| id.to_string()),
            cta_label: self.sections.cta_label().to_string(),
            toast: self.toast.state().clone(),
            panel_state: self.panel.state(),
            selected_project: self.panel.selected(),
            background_scroll_locked: self.panel.scroll_locked(),
            current_image_index: self.gallery.index(),
            current_image: self.gallery.current().cloned(),
            current_page_index: cursor.current_index,
            items_per_view: cursor.items_per_view,
            total_pages: self.paginator.total_pages(),
            track_offset_percent: self.paginator.track_offset_percent(),
            breakpoint: self.paginator.breakpoint(),
            carousel_scroll_offset: carousel.scroll_offset,
            carousel_scroll_behavior: self.scroll_behavior,
            carousel_dragging: carousel.is_dragging,
            show_drag_hint: self.carousel.hint_visible(),
            counter_text: self
                .counter_text
                .iter()
                .map(|(id, text)| (id.to_string(), text.clone()))
                .collect(),
            contact_draft: self.draft.clone(),
            submission_busy: self.busy,
        }
    }
}

/// Reactive fields consumed by the template renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub active_section_id: Option<String>,
    pub cta_label: String,
    pub toast: ToastState,
    pub panel_state: PanelState,
    pub selected_project: Option<usize>,
    pub background_scroll_locked: bool,
    pub current_image_index: usize,
    pub current_image: Option<GalleryImage>,
    pub current_page_index: usize,
    pub items_per_view: usize,
    pub total_pages: usize,
    pub track_offset_percent: f64,
    pub breakpoint: Breakpoint,
    pub carousel_scroll_offset: f64,
    pub carousel_scroll_behavior: ScrollBehavior,
    pub carousel_dragging: bool,
    pub show_drag_hint: bool,
    pub counter_text: BTreeMap<String, String>,
    pub contact_draft: ContactDraft,
    pub submission_busy: bool,
}

/// Cloneable handle to the one interaction state.
#[derive(Debug, Clone)]
pub struct SharedState(Arc<Mutex<InteractionState>>);

impl SharedState {
    pub fn new(state: InteractionState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    /// Run one atomic action against the state.
    ///
    /// A panic inside an earlier action leaves the data structurally valid
    /// (every component keeps its own invariants), so a poisoned lock is
    /// recovered rather than propagated to the page.
    pub fn with<R>(&self, action: impl FnOnce(&mut InteractionState) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut guard)
    }

    pub fn view(&self) -> ViewModel {
        self.with(|state| state.view())
    }
}
