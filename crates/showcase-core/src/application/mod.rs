//! Application layer for the showcase interaction layer.
//!
//! This layer contains:
//! - **Services**: the `ShowcaseController`, the contact pipeline, timers
//! - **Ports**: traits for animation, visibility, and delivery
//! - **State**: the single shared interaction state and its view model
//! - **Errors**: application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod events;
pub mod ports;
mod runtime;
pub mod services;
pub mod state;

pub use services::{
    Adapters, ContactSubmissionPipeline, GestureResponse, ShowcaseController, SubmitOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    AnimationCompleter, AnimationEngine, AnimationHandle, DeliveryError, DeliveryRequest,
    DeliveryTransport, VisibilityWatcher,
};

pub use error::{ApplicationError, DeliveryStage};
pub use events::{UiEvent, VisibilityEvent};
pub use state::{SharedState, ViewModel};
