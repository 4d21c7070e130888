// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the showcase interaction layer.
//!
//! This module contains pure state machines and content types. Nothing here
//! sleeps, spawns, or talks to a port: timers and animation playback are the
//! application layer's job.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every transition is a plain method call
//! - **No I/O**: no DOM, network, or clock access
//! - **Guarded transitions**: invalid input is a no-op, never a panic
//! - **Fail fast on content**: empty lists are rejected at load time
//!
// Public API - what the world sees
pub mod animation;
pub mod entities;
pub mod error;
pub mod interaction;
pub mod settings;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use animation::{Animation, AnimationTarget, Ease, Props, TweenMode};
pub use entities::{ContactDraft, ContactPayload, GalleryImage, Project, SiteContent};
pub use error::{DomainError, ErrorCategory};
pub use interaction::{
    CardLayout, CarouselState, CounterAnimation, CounterSpec, DragScrollCarousel, ImageCarousel,
    ModalPanel, PageCursor, ProjectPaginator, RevealKind, RevealTarget, SectionActivityTracker,
    SnapTarget, ToastNotifier, ToastState, ToastTicket, VisibilityRevealController,
};
pub use settings::{
    CounterTiming, CtaLabels, DeliverySettings, DragSettings, InteractionSettings, Thresholds,
    ToastMessages,
};
pub use value_objects::{
    Breakpoint, Breakpoints, DraftField, ElementId, PanelState, ScrollBehavior, Threshold,
    ToastKind,
};

pub use validation::DomainValidator;
