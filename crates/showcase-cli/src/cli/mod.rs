//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "showcase",
    bin_name = "showcase",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate and replay the portfolio interaction layer",
    long_about = "showcase loads a site content file, validates it, and replays \
                  recorded UI event scripts through the interaction controller \
                  on a virtual clock, printing the rendered surface.",
    after_help = "EXAMPLES:\n\
        \x20 showcase check --site site.toml\n\
        \x20 showcase replay session.json --output-format json\n\
        \x20 showcase replay submit.json --fail-stage 2\n\
        \x20 showcase completions bash > /usr/share/bash-completion/completions/showcase",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load and validate site content.
    #[command(
        about = "Validate a site file",
        after_help = "EXAMPLES:\n\
            \x20 showcase check\n\
            \x20 showcase check --site site.toml\n\
            \x20 showcase check --site site.json --output-format json"
    )]
    Check,

    /// Replay a UI event script.
    #[command(
        visible_alias = "r",
        about = "Replay a UI event script",
        after_help = "EXAMPLES:\n\
            \x20 showcase replay session.json\n\
            \x20 showcase replay session.json --fail-stage 1\n\
            \x20 showcase replay session.json --live --site site.toml"
    )]
    Replay(ReplayArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 showcase completions bash > ~/.local/share/bash-completion/completions/showcase\n\
            \x20 showcase completions zsh  > ~/.zfunc/_showcase\n\
            \x20 showcase completions fish > ~/.config/fish/completions/showcase.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 showcase config get delivery.api_base\n\
            \x20 showcase config list\n\
            \x20 showcase config path"
    )]
    Config(ConfigCommands),
}

// ── replay ────────────────────────────────────────────────────────────────────

/// Arguments for `showcase replay`.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON array of UI events.
    #[arg(value_name = "SCRIPT", help = "Event script (JSON array)")]
    pub script: PathBuf,

    /// Reject the given delivery call (1 = notify, 2 = auto-reply).
    ///
    /// Calls are counted across the whole replay, so `3` rejects the
    /// notification of a second submission.
    #[arg(
        long = "fail-stage",
        value_name = "N",
        conflicts_with = "live",
        help = "Reject delivery call N (repeatable)"
    )]
    pub fail_stage: Vec<usize>,

    /// Deliver through the real HTTP transport on a wall clock.
    #[arg(long = "live", help = "Use the HTTP delivery transport")]
    pub live: bool,

    /// Include every played animation in the report.
    #[arg(long = "animations", help = "List played animations")]
    pub animations: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `showcase completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `showcase config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `delivery.api_base`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
