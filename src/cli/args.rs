//! CLI argument definitions
//!
//! All Clap derive structs for `docdeck` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Remote-manifest documentation viewer.
#[derive(Parser, Debug)]
#[command(name = "docdeck", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the documentation page (or a single topic) to stdout.
    Render(RenderArgs),

    /// Query the topic-title search index.
    Search(SearchArgs),

    /// Serve the documentation UI locally.
    Serve(ServeArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Shared options
// ============================================================================

/// Options shared by every command that touches the remote site.
#[derive(Args, Debug)]
pub struct SiteArgs {
    /// Path to YAML configuration file.
    #[arg(short, long, env = "DOCDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remote content base URL, overriding the configuration file.
    #[arg(long, env = "DOCDECK_BASE_URL")]
    pub base_url: Option<String>,
}

/// Output format for machine-readable commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals.
    #[default]
    Human,
    /// JSON for machine consumption.
    Json,
}

// ============================================================================
// Per-command arguments
// ============================================================================

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Section to open instead of the first one.
    #[arg(short, long)]
    pub section: Option<String>,

    /// Topic title to open (case-insensitive), instead of the default entry.
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Print only the content region, not the whole page.
    #[arg(long)]
    pub content_only: bool,

    /// Viewport width deciding the desktop/mobile layout.
    #[arg(long, default_value_t = 1280)]
    pub viewport_width: u32,
}

/// Arguments for `search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Query text matched against topic titles.
    pub query: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Address to bind, `host:port`.
    #[arg(long, default_value = "127.0.0.1:8787", env = "DOCDECK_HTTP")]
    pub http: String,
}

/// Arguments for `version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}
