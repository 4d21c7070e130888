//! Visibility watcher adapters.

mod memory;

pub use memory::MemoryVisibility;
