//! Infrastructure adapters for the showcase interaction layer.
//!
//! This crate implements the ports defined in
//! `showcase_core::application::ports` and loads site files. It holds every
//! I/O dependency (HTTP, filesystem, serialisation formats).

pub mod animation;
pub mod delivery;
pub mod site_loader;
pub mod visibility;

// Re-export commonly used adapters
pub use animation::{Playback, RecordingAnimator};
pub use delivery::{EmailJsConfig, EmailJsTransport, ScriptedTransport};
pub use site_loader::SiteFile;
pub use visibility::MemoryVisibility;
