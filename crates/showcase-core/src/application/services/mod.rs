//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain state machines, the shared state, and
//! the driven ports. Timers live here; the domain layer never sleeps.

pub mod contact_service;
pub mod counter_service;
pub mod motion;
pub mod showcase_service;
pub mod toast_service;

pub use contact_service::{ContactSubmissionPipeline, SubmitOutcome};
pub use counter_service::CounterService;
pub use showcase_service::{Adapters, GestureResponse, ShowcaseController};
pub use toast_service::ToastService;
