//! Delivery transport adapters.

mod emailjs;
mod memory;

pub use emailjs::{EmailJsConfig, EmailJsTransport};
pub use memory::ScriptedTransport;
