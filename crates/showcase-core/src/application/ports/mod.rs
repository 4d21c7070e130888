//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `showcase-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `AnimationEngine`: property tweens with completion handles
//!   - `VisibilityWatcher`: viewport intersection registration
//!   - `DeliveryTransport`: outbound contact message delivery
//!
//! - **Driving (Input) Ports**: Called by the host page
//!   - `ShowcaseController` methods and `UiEvent` dispatch

pub mod output;

pub use output::{
    AnimationCompleter, AnimationEngine, AnimationHandle, DeliveryError, DeliveryRequest,
    DeliveryTransport, VisibilityWatcher,
};
