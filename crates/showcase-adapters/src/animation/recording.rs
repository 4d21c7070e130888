//! Headless animation engine.
//!
//! Records every tween it is asked to play and completes the handle either
//! at once or after the tween's nominal duration on the tokio clock.

use std::sync::{Arc, Mutex, PoisonError};

use showcase_core::{
    application::ports::{AnimationEngine, AnimationHandle},
    domain::Animation,
};
use tracing::{debug, warn};

/// When a played tween reports completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// The handle resolves immediately.
    #[default]
    Instant,
    /// The handle resolves after `delay + duration` of runtime time.
    Timed,
}

/// Animation engine that records what it played.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator {
    playback: Playback,
    played: Arc<Mutex<Vec<Animation>>>,
}

impl RecordingAnimator {
    pub fn new(playback: Playback) -> Self {
        Self {
            playback,
            played: Arc::default(),
        }
    }

    /// Every animation played so far, in order.
    pub fn played(&self) -> Vec<Animation> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.played().iter().map(|a| a.name).collect()
    }

    pub fn clear(&self) {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl AnimationEngine for RecordingAnimator {
    fn play(&self, animation: Animation) -> AnimationHandle {
        let name = animation.name;
        // A single target element; staggered lists are not counted here.
        let length = animation.total_duration(1);
        debug!(animation = name, target = %animation.target, ?length, "Play");
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(animation);

        match self.playback {
            Playback::Instant => AnimationHandle::completed(name),
            Playback::Timed => {
                let Ok(runtime) = tokio::runtime::Handle::try_current() else {
                    warn!(animation = name, "No runtime; completing immediately");
                    return AnimationHandle::completed(name);
                };
                let (handle, completer) = AnimationHandle::pending(name);
                runtime.spawn(async move {
                    tokio::time::sleep(length).await;
                    completer.complete();
                });
                handle
            }
        }
    }
}
