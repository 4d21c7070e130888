//! Integration tests for showcase-core.
//!
//! Drive a full `ShowcaseController` through its public surface with
//! in-test port implementations and virtual time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use showcase_core::{
    application::{
        AnimationCompleter, DeliveryError, DeliveryRequest, SubmitOutcome, ports::*,
    },
    domain::{Animation, ScrollBehavior, Threshold},
    prelude::*,
};

// ============================================================================
// Port fakes
// ============================================================================

#[derive(Clone, Copy, PartialEq)]
enum Completion {
    Immediate,
    Manual,
    Dropped,
}

struct ManualAnimator {
    mode: Completion,
    played: Mutex<Vec<Animation>>,
    waiting: Mutex<Vec<(&'static str, AnimationCompleter)>>,
}

impl ManualAnimator {
    fn new(mode: Completion) -> Arc<Self> {
        Arc::new(Self {
            mode,
            played: Mutex::new(Vec::new()),
            waiting: Mutex::new(Vec::new()),
        })
    }

    fn names(&self) -> Vec<&'static str> {
        self.played.lock().unwrap().iter().map(|a| a.name).collect()
    }

    fn count(&self, name: &str) -> usize {
        self.names().iter().filter(|n| **n == name).count()
    }

    fn complete(&self, name: &str) {
        let mut waiting = self.waiting.lock().unwrap();
        let pos = waiting.iter().position(|(n, _)| *n == name).unwrap();
        waiting.remove(pos).1.complete();
    }
}

impl AnimationEngine for ManualAnimator {
    fn play(&self, animation: Animation) -> AnimationHandle {
        let name = animation.name;
        self.played.lock().unwrap().push(animation);
        match self.mode {
            Completion::Immediate => AnimationHandle::completed(name),
            Completion::Manual => {
                let (handle, completer) = AnimationHandle::pending(name);
                self.waiting.lock().unwrap().push((name, completer));
                handle
            }
            Completion::Dropped => AnimationHandle::pending(name).0,
        }
    }
}

#[derive(Default)]
struct RecordingWatcher {
    observed: Mutex<Vec<(ElementId, Vec<Threshold>)>>,
    unobserved: Mutex<Vec<ElementId>>,
}

impl VisibilityWatcher for RecordingWatcher {
    fn observe(&self, element: &ElementId, thresholds: &[Threshold]) {
        self.observed
            .lock()
            .unwrap()
            .push((element.clone(), thresholds.to_vec()));
    }

    fn unobserve(&self, element: &ElementId) {
        self.unobserved.lock().unwrap().push(element.clone());
    }
}

mock! {
    Transport {}

    #[async_trait]
    impl DeliveryTransport for Transport {
        async fn deliver(&self, request: DeliveryRequest) -> Result<(), DeliveryError>;
    }
}

struct Harness {
    controller: ShowcaseController,
    animator: Arc<ManualAnimator>,
    watcher: Arc<RecordingWatcher>,
}

fn harness_with(mode: Completion, transport: MockTransport) -> Harness {
    let animator = ManualAnimator::new(mode);
    let watcher = Arc::new(RecordingWatcher::default());
    let controller = ShowcaseController::new(
        SiteContent::default(),
        InteractionSettings::default(),
        Adapters {
            animator: animator.clone(),
            watcher: watcher.clone(),
            transport: Arc::new(transport),
        },
    )
    .unwrap();
    Harness {
        controller,
        animator,
        watcher,
    }
}

fn harness(mode: Completion) -> Harness {
    harness_with(mode, MockTransport::new())
}

fn visible(element: &str, ratio: f32) -> VisibilityEvent {
    VisibilityEvent {
        element: element.into(),
        ratio,
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn empty_gallery_fails_at_construction() {
    let site = SiteContent {
        gallery: Vec::new(),
        ..SiteContent::default()
    };
    let err = ShowcaseController::new(
        site,
        InteractionSettings::default(),
        Adapters {
            animator: ManualAnimator::new(Completion::Immediate),
            watcher: Arc::new(RecordingWatcher::default()),
            transport: Arc::new(MockTransport::new()),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ShowcaseError::Domain(showcase_core::domain::DomainError::EmptyGallery)
    ));
}

// ============================================================================
// Detail panel
// ============================================================================

#[tokio::test]
async fn open_then_close_before_backdrop_completes_ends_closed() {
    let h = harness(Completion::Manual);

    h.controller.open_panel(None);
    let view = h.controller.snapshot();
    assert_eq!(view.panel_state, PanelState::Open);
    assert!(view.background_scroll_locked);
    assert_eq!(view.selected_project, Some(0));

    let release = async {
        assert_eq!(h.controller.snapshot().panel_state, PanelState::Closing);
        h.animator.complete("backdrop.fade-out");
    };
    tokio::join!(h.controller.close_panel(), release);

    let view = h.controller.snapshot();
    assert_eq!(view.panel_state, PanelState::Closed);
    assert!(!view.background_scroll_locked);
    assert_eq!(view.selected_project, None);
}

#[tokio::test]
async fn dropped_backdrop_animation_still_closes() {
    let h = harness(Completion::Dropped);
    h.controller.open_panel(Some(2));
    h.controller.close_panel().await;

    let view = h.controller.snapshot();
    assert_eq!(view.panel_state, PanelState::Closed);
    assert!(!view.background_scroll_locked);
}

#[tokio::test]
async fn open_schedules_backdrop_then_staged_entrance() {
    let h = harness(Completion::Immediate);
    h.controller.open_panel(None);
    assert_eq!(
        h.animator.names(),
        [
            "backdrop.fade-in",
            "panel.slide-in",
            "panel.header-in",
            "panel.sections-in"
        ]
    );
}

#[tokio::test]
async fn repeated_open_and_close_are_no_ops() {
    let h = harness(Completion::Immediate);

    h.controller.close_panel().await;
    assert!(h.animator.names().is_empty());

    h.controller.open_panel(Some(1));
    h.controller.open_panel(Some(2));
    assert_eq!(h.animator.count("backdrop.fade-in"), 1);
    assert_eq!(h.controller.snapshot().selected_project, Some(1));

    h.controller.close_panel().await;
    h.controller.close_panel().await;
    assert_eq!(h.animator.count("backdrop.fade-out"), 1);
}

#[tokio::test]
async fn unknown_project_leaves_panel_closed() {
    let h = harness(Completion::Immediate);
    h.controller.open_panel(Some(99));
    assert_eq!(h.controller.snapshot().panel_state, PanelState::Closed);
    assert!(h.animator.names().is_empty());
}

// ============================================================================
// Sections and reveals
// ============================================================================

#[tokio::test]
async fn last_section_crossing_sets_cta_label() {
    let h = harness(Completion::Immediate);

    h.controller.on_visibility(visible("projects", 0.7));
    assert_eq!(h.controller.snapshot().cta_label, "Want something like this?");

    h.controller.on_visibility(visible("contact", 0.65));
    let view = h.controller.snapshot();
    assert_eq!(view.active_section_id.as_deref(), Some("contact"));
    assert_eq!(view.cta_label, "Send me a message");

    h.controller.on_visibility(visible("about", 0.61));
    assert_eq!(h.controller.snapshot().cta_label, "Let's talk about your idea");
}

#[tokio::test]
async fn mount_observes_each_element_once_with_all_thresholds() {
    let h = harness(Completion::Immediate);
    h.controller.mount(1280.0);
    h.controller.mount(1280.0);

    let observed = h.watcher.observed.lock().unwrap();
    let about: Vec<_> = observed
        .iter()
        .filter(|(id, _)| id.as_str() == "about")
        .collect();
    assert_eq!(about.len(), 1);
    assert_eq!(
        about[0].1,
        [Threshold::new_unchecked(0.6), Threshold::new_unchecked(0.25)]
    );
    assert!(observed.iter().any(|(id, _)| id.as_str() == "featured-project"));
    assert_eq!(h.animator.count("dot-nav.intro"), 1);
}

#[tokio::test]
async fn reveal_plays_once_and_keeps_section_watch() {
    let h = harness(Completion::Immediate);
    h.controller.mount(1280.0);

    h.controller.on_visibility(visible("about", 0.1));
    assert_eq!(h.animator.count("section.reveal"), 0);

    h.controller.on_visibility(visible("about", 0.3));
    h.controller.on_visibility(visible("about", 0.9));
    assert_eq!(h.animator.count("section.reveal"), 1);

    // "about" is still a tracked section.
    assert!(h.watcher.unobserved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn featured_block_reveals_three_layers() {
    let h = harness(Completion::Immediate);
    h.controller.on_visibility(visible("featured-project", 0.2));

    let names = h.animator.names();
    assert_eq!(
        names,
        ["featured.block", "featured.content", "featured.visual"]
    );
    assert_eq!(
        h.watcher.unobserved.lock().unwrap().as_slice(),
        [ElementId::from("featured-project")]
    );
}

#[tokio::test(start_paused = true)]
async fn counter_rolls_up_monotonically_to_target() {
    let h = harness(Completion::Immediate);
    h.controller.mount(1280.0);
    h.controller.on_visibility(visible("stat-projects", 0.6));

    let mut last = 0u64;
    for _ in 0..70 {
        tokio::time::sleep(Duration::from_millis(30)).await;
        let text = h.controller.snapshot().counter_text["stat-projects"].clone();
        let value: u64 = text.trim_start_matches('+').parse().unwrap();
        assert!(value >= last, "counter went backwards: {last} -> {value}");
        last = value;
    }
    assert_eq!(h.controller.snapshot().counter_text["stat-projects"], "+6");

    // A second crossing does not restart it.
    h.controller.on_visibility(visible("stat-projects", 1.0));
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(h.controller.snapshot().counter_text["stat-projects"], "+6");
}

// ============================================================================
// Drag carousel
// ============================================================================

#[tokio::test]
async fn drag_end_snaps_to_nearest_card() {
    let h = harness(Completion::Immediate);
    h.controller.scrolled(500.0);
    h.controller.gesture_start(600.0, 100.0);

    let response = h.controller.gesture_move(600.0, 100.0);
    assert!(response.prevent_default);

    let snap = h.controller.gesture_end(300.0).unwrap();
    assert_eq!(snap.index, 2);
    assert_eq!(snap.offset, 664.0);

    let view = h.controller.snapshot();
    assert_eq!(view.carousel_scroll_offset, 664.0);
    assert_eq!(view.carousel_scroll_behavior, ScrollBehavior::Smooth);
    assert!(!view.carousel_dragging);
}

#[tokio::test]
async fn malformed_gestures_are_ignored() {
    let h = harness(Completion::Immediate);
    assert!(!h.controller.gesture_move(50.0, 0.0).prevent_default);
    assert_eq!(h.controller.gesture_end(300.0), None);

    h.controller.gesture_start(50.0, 0.0);
    assert!(h.controller.gesture_end(300.0).is_some());
    assert_eq!(h.controller.gesture_end(300.0), None);
}

#[tokio::test(start_paused = true)]
async fn drag_hint_times_out_after_mount() {
    let h = harness(Completion::Immediate);
    h.controller.mount(1280.0);
    assert!(h.controller.snapshot().show_drag_hint);

    tokio::time::sleep(Duration::from_millis(3_900)).await;
    assert!(h.controller.snapshot().show_drag_hint);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!h.controller.snapshot().show_drag_hint);
}

#[tokio::test]
async fn first_gesture_clears_drag_hint() {
    let h = harness(Completion::Immediate);
    h.controller.gesture_start(10.0, 0.0);
    assert!(!h.controller.snapshot().show_drag_hint);
}

// ============================================================================
// Paginator and gallery
// ============================================================================

#[tokio::test]
async fn paging_wraps_and_resize_clamps() {
    let h = harness(Completion::Immediate);
    h.controller.mount(1280.0);

    // 6 projects, 3 per view: valid indices 0..=3.
    h.controller.prev_page();
    assert_eq!(h.controller.snapshot().current_page_index, 3);
    h.controller.next_page();
    assert_eq!(h.controller.snapshot().current_page_index, 0);

    h.controller.resize(400.0);
    let view = h.controller.snapshot();
    assert_eq!(view.items_per_view, 1);
    assert_eq!(view.total_pages, 6);

    h.controller.prev_page();
    assert_eq!(h.controller.snapshot().current_page_index, 5);
    h.controller.resize(1280.0);
    assert_eq!(h.controller.snapshot().current_page_index, 3);
}

#[tokio::test]
async fn gallery_cycles_in_both_directions() {
    let h = harness(Completion::Immediate);
    let len = h.controller.site().gallery.len();
    for _ in 0..len {
        h.controller.next_image();
    }
    assert_eq!(h.controller.snapshot().current_image_index, 0);

    h.controller.prev_image();
    assert_eq!(h.controller.snapshot().current_image_index, len - 1);
}

// ============================================================================
// Contact pipeline
// ============================================================================

#[tokio::test(start_paused = true)]
async fn failed_stage_one_keeps_draft_and_skips_stage_two() {
    let mut transport = MockTransport::new();
    transport
        .expect_deliver()
        .times(1)
        .returning(|_| Err(DeliveryError::Transport("connection reset".into())));
    let h = harness_with(Completion::Immediate, transport);

    h.controller.edit_draft(DraftField::Name, "Grace");
    h.controller.edit_draft(DraftField::Email, "grace@example.com");
    h.controller.edit_draft(DraftField::Message, "Let's build something");

    assert!(matches!(
        h.controller.submit().await,
        SubmitOutcome::Failed(_)
    ));

    let view = h.controller.snapshot();
    assert!(!view.submission_busy);
    assert_eq!(view.toast.kind, ToastKind::Error);
    assert_eq!(view.contact_draft.name, "Grace");

    tokio::time::sleep(Duration::from_millis(3_600)).await;
    assert!(!h.controller.snapshot().toast.visible);
}

#[tokio::test]
async fn successful_submission_resets_draft() {
    let mut transport = MockTransport::new();
    transport.expect_deliver().times(2).returning(|_| Ok(()));
    let h = harness_with(Completion::Immediate, transport);

    h.controller.edit_draft(DraftField::Message, "hi");
    assert_eq!(h.controller.submit().await, SubmitOutcome::Delivered);

    let view = h.controller.snapshot();
    assert_eq!(view.toast.kind, ToastKind::Success);
    assert_eq!(view.contact_draft, ContactDraft::default());
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test(start_paused = true)]
async fn replaying_a_script_matches_direct_calls() {
    let script = r#"[
        {"type": "mount", "viewport_width": 900},
        {"type": "visibility", "element": "projects", "ratio": 0.8},
        {"type": "next_page"},
        {"type": "open_panel", "project": 1},
        {"type": "next_image"},
        {"type": "close_panel"},
        {"type": "wait", "ms": 4500}
    ]"#;
    let events: Vec<UiEvent> = serde_json::from_str(script).unwrap();

    let h = harness(Completion::Immediate);
    for event in events {
        h.controller.dispatch(event).await;
    }

    let view = h.controller.snapshot();
    assert_eq!(view.items_per_view, 2);
    assert_eq!(view.current_page_index, 1);
    assert_eq!(view.active_section_id.as_deref(), Some("projects"));
    assert_eq!(view.panel_state, PanelState::Closed);
    assert_eq!(view.current_image_index, 1);
    assert!(!view.show_drag_hint);
}
