//! Showcase Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! interaction layer of a single-page showcase site, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     host page / showcase-cli replay     │
//! │       (calls the driving surface)       │
//! └──────────────────┬──────────────────────┘
//!                    │ UiEvent / action methods
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           ShowcaseController            │
//! │   (one SharedState, timers, pipeline)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  (AnimationEngine, VisibilityWatcher,   │
//! │           DeliveryTransport)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    showcase-adapters (Infrastructure)   │
//! │ (RecordingAnimator, EmailJsTransport..) │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (carousel, paginator, panel, toast,    │
//! │   reveals, sections, counters)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use showcase_core::prelude::*;
//!
//! # async fn run(adapters: Adapters) -> ShowcaseResult<()> {
//! let controller = ShowcaseController::new(
//!     SiteContent::default(),
//!     InteractionSettings::default(),
//!     adapters,
//! )?;
//!
//! controller.mount(1280.0);
//! controller.open_panel(None);
//! controller.close_panel().await;
//! println!("{:?}", controller.snapshot().panel_state);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Adapters, ShowcaseController, SubmitOutcome, UiEvent, ViewModel, VisibilityEvent,
        ports::{AnimationEngine, AnimationHandle, DeliveryTransport, VisibilityWatcher},
    };
    pub use crate::domain::{
        ContactDraft, DraftField, ElementId, GalleryImage, InteractionSettings, PanelState,
        Project, SiteContent, ToastKind,
    };
    pub use crate::error::{ShowcaseError, ShowcaseResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
