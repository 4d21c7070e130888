//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the interaction layer needs from its host.
//! The `showcase-adapters` crate provides implementations.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::oneshot;

use crate::application::ApplicationError;
use crate::domain::{Animation, ContactPayload, ElementId, Threshold};

/// Port for the property-tween engine.
///
/// Implemented by:
/// - `showcase_adapters::animation::RecordingAnimator` (headless / testing)
///
/// ## Design Notes
///
/// - `play` never blocks; it schedules and returns a handle
/// - Dropping the handle is fire-and-forget
/// - Awaiting [`AnimationHandle::finished`] is the `onComplete` hook
pub trait AnimationEngine: Send + Sync {
    fn play(&self, animation: Animation) -> AnimationHandle;
}

/// Completion signal for a scheduled animation.
#[derive(Debug)]
pub struct AnimationHandle {
    name: &'static str,
    done: Option<oneshot::Receiver<()>>,
}

/// Engine-side half of an [`AnimationHandle`].
#[derive(Debug)]
pub struct AnimationCompleter {
    tx: oneshot::Sender<()>,
}

impl AnimationHandle {
    /// A handle that resolves once the returned completer fires.
    pub fn pending(name: &'static str) -> (Self, AnimationCompleter) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                name,
                done: Some(rx),
            },
            AnimationCompleter { tx },
        )
    }

    /// A handle for an animation that has already finished.
    pub fn completed(name: &'static str) -> Self {
        Self { name, done: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Wait for the animation to finish.
    pub async fn finished(self) -> Result<(), ApplicationError> {
        match self.done {
            None => Ok(()),
            Some(rx) => rx
                .await
                .map_err(|_| ApplicationError::AnimationInterrupted { name: self.name }),
        }
    }
}

impl AnimationCompleter {
    pub fn complete(self) {
        // The caller may have dropped its handle; that is fine.
        let _ = self.tx.send(());
    }
}

/// Port for viewport intersection reports.
///
/// The host calls back into `ShowcaseController::on_visibility` whenever an
/// observed element's visible fraction passes one of its thresholds.
pub trait VisibilityWatcher: Send + Sync {
    fn observe(&self, element: &ElementId, thresholds: &[Threshold]);

    fn unobserve(&self, element: &ElementId);
}

/// One outbound message delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub service_id: String,
    pub template_id: String,
    pub payload: ContactPayload,
    pub public_key: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Port for the outbound message service.
///
/// Implemented by:
/// - `showcase_adapters::delivery::EmailJsTransport` (HTTP)
/// - `showcase_adapters::delivery::ScriptedTransport` (testing)
#[async_trait]
pub trait DeliveryTransport: Send + Sync {
    /// Resolve on acceptance, reject on transport or validation failure.
    async fn deliver(&self, request: DeliveryRequest) -> Result<(), DeliveryError>;
}
