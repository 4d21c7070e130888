//! Animation engine adapters.

mod recording;

pub use recording::{Playback, RecordingAnimator};
