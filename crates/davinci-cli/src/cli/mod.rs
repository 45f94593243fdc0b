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
    name    = "davinci",
    bin_name = "davinci",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Da Vinci sub-theme generator",
    long_about = "Creates Da Vinci sub-themes by copying a starterkit and \
                  rewriting its placeholder tokens.",
    after_help = "EXAMPLES:\n\
        \x20 davinci subtheme 'My Theme'\n\
        \x20 davinci subtheme 'My Theme' --machine-name my_theme\n\
        \x20 davinci list\n\
        \x20 davinci completions bash > /usr/share/bash-completion/completions/davinci",
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
    /// Create a sub-theme from a starterkit.
    #[command(
        visible_alias = "st",
        about = "Create a sub-theme",
        after_help = "EXAMPLES:\n\
            \x20 davinci subtheme 'My Theme'\n\
            \x20 davinci subtheme 'My Theme' --machine-name my_theme\n\
            \x20 davinci subtheme 'My Theme' --destination ./themes/custom --starterkit default"
    )]
    Subtheme(SubthemeArgs),

    /// List installed starterkits.
    #[command(
        visible_alias = "ls",
        about = "List installed starterkits",
        after_help = "EXAMPLES:\n\
            \x20 davinci list\n\
            \x20 davinci list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 davinci completions bash > ~/.local/share/bash-completion/completions/davinci\n\
            \x20 davinci completions zsh  > ~/.zfunc/_davinci\n\
            \x20 davinci completions fish > ~/.config/fish/completions/davinci.fish"
    )]
    Completions(CompletionsArgs),
}

// ── subtheme ──────────────────────────────────────────────────────────────────

/// Arguments for `davinci subtheme`.
#[derive(Debug, Args)]
pub struct SubthemeArgs {
    /// Human-readable theme label.
    #[arg(value_name = "NAME", help = "Human-readable theme name")]
    pub name: String,

    /// Machine-readable name; derived from the label when omitted.
    #[arg(
        short = 'm',
        long = "machine-name",
        value_name = "ID",
        help = "Machine name of the sub-theme (derived from NAME if omitted)"
    )]
    pub machine_name: Option<String>,

    /// Theme description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Description of the sub-theme"
    )]
    pub description: Option<String>,

    /// Directory the sub-theme is created under.
    #[arg(
        long = "destination",
        value_name = "DIR",
        help = "Destination directory (default: ./themes/custom or ./themes)"
    )]
    pub destination: Option<PathBuf>,

    /// Starterkit to copy.
    #[arg(
        short = 's',
        long = "starterkit",
        value_name = "ID",
        help = "Starterkit to use (default: default)"
    )]
    pub starterkit: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `davinci list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "list",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `davinci completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
