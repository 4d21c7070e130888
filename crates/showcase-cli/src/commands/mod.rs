//! Subcommand handlers. Each module exposes one `execute` function.

pub mod check;
pub mod completions;
pub mod config;
pub mod replay;
