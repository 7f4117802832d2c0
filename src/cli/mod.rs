//! CLI module for hcdash
//!
//! Command-line interface definitions and handlers for the health-check dashboard client.
//!
//! # Commands
//!
//! - `preview start|stop` - Control the configuration preview
//! - `reload` - Reload the dashboard configuration
//! - `status` - Show the current health of every service
//! - `watch` - Follow health status updates as they arrive
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start a preview, writing failures into an HTML fragment
//! hcdash preview start --base-url http://dash:8080 --error-panel errors.html
//!
//! # Show preview status as JSON
//! hcdash status --preview --json
//! ```

pub mod actions;
pub mod completions;
pub mod config;
pub mod output;
pub mod status;

pub use actions::handle_action;
pub use completions::handle_completions;
pub use config::handle_config_init;
pub use status::{handle_status, handle_watch};

use crate::config::DashboardConfig;
use crate::endpoints::StatusStream;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hcdash - Health-check dashboard client
#[derive(Parser, Debug)]
#[command(
    name = "hcdash",
    version,
    about = "Drive a health-check dashboard: preview control, reloads and live status"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Control the configuration preview
    #[command(subcommand)]
    Preview(PreviewCommands),
    /// Reload the dashboard configuration
    Reload(ActionArgs),
    /// Show current service health
    Status(StatusArgs),
    /// Follow health status updates
    Watch(WatchArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Subcommand, Debug)]
pub enum PreviewCommands {
    /// Start previewing the edited configuration
    Start(ActionArgs),
    /// Stop the running preview
    Stop(ActionArgs),
}

/// Options shared by every command that talks to the dashboard
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "hcdash.toml")]
    pub config: PathBuf,

    /// Dashboard base URL
    #[arg(short = 'u', long, env = "HCDASH_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HCDASH_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ActionArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Write failures to this file as HTML list items instead of alerting
    #[arg(short, long, env = "HCDASH_ERROR_PANEL")]
    pub error_panel: Option<PathBuf>,

    /// Do not wait for Enter after an alert
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Read the preview stream instead of the published one
    #[arg(long)]
    pub preview: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Read the preview stream instead of the published one
    #[arg(long)]
    pub preview: bool,

    /// Stop after this many updates
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "hcdash.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

fn stream_kind(preview: bool) -> StatusStream {
    if preview {
        StatusStream::Preview
    } else {
        StatusStream::Published
    }
}

/// Load configuration with CLI overrides
///
/// A missing config file falls back to defaults; a broken one is an error.
pub fn load_config_with_overrides(
    args: &ConnectionArgs,
) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        DashboardConfig::load(Some(&args.config))?
    } else {
        DashboardConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref base_url) = args.base_url {
        config.server.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.server.timeout_seconds = timeout;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}
