//! Showcase Controller - the one object the host page talks to.
//!
//! It owns the shared interaction state and wires each user action to the
//! state machine that handles it:
//! 1. Page mount registers visibility watches and plays the intro motion
//! 2. Gestures, paging, and gallery browsing mutate state synchronously
//! 3. The detail panel schedules staged motion through the animation port
//! 4. Visibility crossings drive section tracking, reveals, and counters
//! 5. Form submission runs the two-stage delivery pipeline
//!
//! No action returns an error: invalid input is logged and ignored.

use std::sync::Arc;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::{
        events::{UiEvent, VisibilityEvent},
        ports::{AnimationEngine, DeliveryTransport, VisibilityWatcher},
        runtime::spawn_detached,
        services::{
            contact_service::{ContactSubmissionPipeline, SubmitOutcome},
            counter_service::CounterService,
            motion,
            toast_service::ToastService,
        },
        state::{InteractionState, SharedState, ViewModel},
    },
    domain::{
        CardLayout, DomainValidator, DraftField, ElementId, InteractionSettings,
        RevealKind, RevealTarget, ScrollBehavior, SiteContent, SnapTarget, Threshold, ToastKind,
    },
    error::ShowcaseResult,
};

/// Driven-port implementations injected at construction.
#[derive(Clone)]
pub struct Adapters {
    pub animator: Arc<dyn AnimationEngine>,
    pub watcher: Arc<dyn VisibilityWatcher>,
    pub transport: Arc<dyn DeliveryTransport>,
}

/// What the host should do with the pointer event it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureResponse {
    /// Suppress text/image selection and native drag.
    pub prevent_default: bool,
}

/// Cheap to clone; every clone drives the same page.
#[derive(Clone)]
pub struct ShowcaseController {
    inner: Arc<Inner>,
}

struct Inner {
    site: SiteContent,
    settings: InteractionSettings,
    state: SharedState,
    animator: Arc<dyn AnimationEngine>,
    watcher: Arc<dyn VisibilityWatcher>,
    toasts: ToastService,
    counters: CounterService,
    contact: ContactSubmissionPipeline,
}

impl ShowcaseController {
    /// Validate content and settings, then build the initial state.
    ///
    /// This is the only fallible entry point. Empty project or gallery
    /// lists are rejected here so cyclic navigation can never divide by
    /// zero later.
    pub fn new(
        site: SiteContent,
        settings: InteractionSettings,
        adapters: Adapters,
    ) -> ShowcaseResult<Self> {
        DomainValidator::validate(&site, &settings)?;

        let state = SharedState::new(InteractionState::new(&site, &settings)?);
        let toasts = ToastService::new(state.clone(), settings.toast_lifetime());
        let counters = CounterService::new(state.clone(), settings.counter);
        let contact = ContactSubmissionPipeline::new(
            adapters.transport,
            settings.delivery.clone(),
            settings.messages.clone(),
            state.clone(),
            toasts.clone(),
        );

        info!(
            projects = site.projects.len(),
            gallery = site.gallery.len(),
            sections = site.sections.len(),
            "Showcase controller ready"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                site,
                settings,
                state,
                animator: adapters.animator,
                watcher: adapters.watcher,
                toasts,
                counters,
                contact,
            }),
        })
    }

    pub fn site(&self) -> &SiteContent {
        &self.inner.site
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.inner.settings
    }

    /// The current rendered surface.
    pub fn snapshot(&self) -> ViewModel {
        self.inner.state.view()
    }

    // ========================================================================
    // Page lifecycle
    // ========================================================================

    /// Register every visibility watch, play the intro, start the hint timer.
    ///
    /// Runs once; later calls only update the layout width.
    #[instrument(skip(self))]
    pub fn mount(&self, viewport_width: f64) {
        let first = self.inner.state.with(|s| {
            s.paginator.resize(viewport_width);
            !std::mem::replace(&mut s.mounted, true)
        });
        if !first {
            debug!("Already mounted");
            return;
        }

        for (element, thresholds) in self.watch_list() {
            self.inner.watcher.observe(&element, &thresholds);
        }

        drop(self.inner.animator.play(motion::dot_nav_intro()));

        let state = self.inner.state.clone();
        let lifetime = self.inner.settings.drag_hint_lifetime();
        spawn_detached("drag-hint.dismiss", async move {
            tokio::time::sleep(lifetime).await;
            if state.with(|s| s.carousel.dismiss_hint()) {
                debug!("Drag hint timed out");
            }
        });

        info!("Mounted");
    }

    /// Every watched element with all of its thresholds.
    ///
    /// An element that is both a section and a reveal target is observed
    /// once, with both thresholds.
    fn watch_list(&self) -> Vec<(ElementId, Vec<Threshold>)> {
        self.inner.state.with(|s| {
            let mut list: Vec<(ElementId, Vec<Threshold>)> = s
                .sections
                .sections()
                .iter()
                .map(|id| (id.clone(), vec![s.sections.threshold()]))
                .collect();

            for RevealTarget { element, threshold, .. } in s.reveals.pending() {
                match list.iter_mut().find(|(id, _)| id == element) {
                    Some((_, thresholds)) if !thresholds.contains(threshold) => {
                        thresholds.push(*threshold)
                    }
                    Some(_) => {}
                    None => list.push((element.clone(), vec![*threshold])),
                }
            }
            list
        })
    }

    #[instrument(skip(self))]
    pub fn resize(&self, viewport_width: f64) {
        let changed = self.inner.state.with(|s| s.paginator.resize(viewport_width));
        if changed {
            debug!("Layout class changed");
        }
    }

    /// One intersection report from the host.
    ///
    /// Section tracking and reveals each apply their own threshold to the
    /// same report.
    pub fn on_visibility(&self, event: VisibilityEvent) {
        let VisibilityEvent { element, ratio } = event;
        let (became_active, revealed, is_section) = self.inner.state.with(|s| {
            (
                s.sections.record(&element, ratio),
                s.reveals.record(&element, ratio),
                s.sections.tracks(&element),
            )
        });

        if became_active {
            trace!(section = %element, ratio, "Section active");
        }

        let Some(target) = revealed else { return };
        if !is_section {
            self.inner.watcher.unobserve(&element);
        }
        self.reveal(target);
    }

    fn reveal(&self, target: RevealTarget) {
        debug!(element = %target.element, "Revealing");
        match target.kind {
            RevealKind::Prose => {
                drop(self.inner.animator.play(motion::section_reveal(&target.element)));
            }
            RevealKind::Featured => {
                for animation in motion::featured_reveal(&target.element) {
                    drop(self.inner.animator.play(animation));
                }
            }
            RevealKind::Counter(spec) => self.inner.counters.start(spec),
        }
    }

    // ========================================================================
    // Drag carousel
    // ========================================================================

    /// The strip scrolled by means other than a drag.
    pub fn scrolled(&self, offset: f64) {
        self.inner.state.with(|s| {
            s.carousel.sync_scroll(offset);
            s.scroll_behavior = ScrollBehavior::Instant;
        });
    }

    pub fn gesture_start(&self, pointer_x: f64, container_left: f64) {
        self.inner.state.with(|s| {
            s.carousel.start(pointer_x, container_left);
            s.scroll_behavior = ScrollBehavior::Instant;
        });
    }

    pub fn gesture_move(&self, pointer_x: f64, container_left: f64) -> GestureResponse {
        let moved = self
            .inner
            .state
            .with(|s| s.carousel.drag_to(pointer_x, container_left));
        GestureResponse {
            prevent_default: moved.is_some(),
        }
    }

    /// End the drag and ask the host to smooth-scroll to the nearest card.
    pub fn gesture_end(&self, card_width: f64) -> Option<SnapTarget> {
        let layout = CardLayout {
            card_width,
            gap: self.inner.settings.drag.card_gap,
            card_count: self.inner.site.projects.len(),
        };
        self.inner.state.with(|s| {
            let snap = s.carousel.end(&layout);
            if snap.is_some() {
                s.scroll_behavior = ScrollBehavior::Smooth;
            }
            snap
        })
    }

    // ========================================================================
    // Paginator
    // ========================================================================

    pub fn next_page(&self) {
        self.inner.state.with(|s| s.paginator.next());
    }

    pub fn prev_page(&self) {
        self.inner.state.with(|s| s.paginator.prev());
    }

    // ========================================================================
    // Detail panel
    // ========================================================================

    /// Open the detail panel for `project`, or the featured project.
    ///
    /// Entrance motion is scheduled and not awaited; the panel is `Open` as
    /// soon as this returns. A no-op unless the panel is `Closed`.
    #[instrument(skip(self))]
    pub fn open_panel(&self, project: Option<usize>) {
        let index = project.unwrap_or(self.inner.site.featured_project);
        if index >= self.inner.site.projects.len() {
            warn!(index, "No such project; panel stays closed");
            return;
        }
        if !self.inner.state.with(|s| s.panel.begin_open(index)) {
            return;
        }

        drop(self.inner.animator.play(motion::backdrop_fade_in()));
        for animation in motion::panel_entrance() {
            drop(self.inner.animator.play(animation));
        }

        self.inner.state.with(|s| s.panel.finish_open());
        info!(project = %self.inner.site.projects[index].title, "Panel open");
    }

    /// Close the panel once the backdrop has faded out.
    ///
    /// A dropped backdrop animation still closes the panel, so scroll is
    /// never left locked.
    #[instrument(skip(self))]
    pub async fn close_panel(&self) {
        if !self.inner.state.with(|s| s.panel.begin_close()) {
            return;
        }

        drop(self.inner.animator.play(motion::panel_slide_out()));
        let fade = self.inner.animator.play(motion::backdrop_fade_out());
        if let Err(e) = fade.finished().await {
            warn!(error = %e, "Closing without backdrop completion");
        }

        self.inner.state.with(|s| s.panel.finish_close());
        info!("Panel closed");
    }

    pub fn next_image(&self) {
        self.inner.state.with(|s| s.gallery.next());
    }

    pub fn prev_image(&self) {
        self.inner.state.with(|s| s.gallery.prev());
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    pub fn edit_draft(&self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        self.inner.state.with(|s| s.draft.set(field, value));
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.inner.contact.submit().await
    }

    /// Show an arbitrary toast.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        self.inner.toasts.show(message, kind);
    }

    // ========================================================================
    // Event dispatch
    // ========================================================================

    /// Apply one host event. `Wait` lets the runtime clock advance.
    pub async fn dispatch(&self, event: UiEvent) {
        trace!(kind = event.kind(), "Dispatch");
        match event {
            UiEvent::Mount { viewport_width } => self.mount(viewport_width),
            UiEvent::Resize { viewport_width } => self.resize(viewport_width),
            UiEvent::Scroll { offset } => self.scrolled(offset),
            UiEvent::GestureStart {
                pointer_x,
                container_left,
            } => self.gesture_start(pointer_x, container_left),
            UiEvent::GestureMove {
                pointer_x,
                container_left,
            } => {
                self.gesture_move(pointer_x, container_left);
            }
            UiEvent::GestureEnd { card_width } => {
                self.gesture_end(card_width);
            }
            UiEvent::Visibility(report) => self.on_visibility(report),
            UiEvent::NextPage => self.next_page(),
            UiEvent::PrevPage => self.prev_page(),
            UiEvent::OpenPanel { project } => self.open_panel(project),
            UiEvent::ClosePanel => self.close_panel().await,
            UiEvent::NextImage => self.next_image(),
            UiEvent::PrevImage => self.prev_image(),
            UiEvent::EditDraft { field, value } => self.edit_draft(field, value),
            UiEvent::Submit => {
                self.submit().await;
            }
            UiEvent::Wait { ms } => tokio::time::sleep(std::time::Duration::from_millis(ms)).await,
        }
    }
}

impl std::fmt::Debug for ShowcaseController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowcaseController")
            .field("state", &self.inner.state)
            .finish_non_exhaustive()
    }
}
