//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(LaunchProfile),
    Cli(CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the MCP endpoint URL for a hostname/port or page URL.
    #[command(about = "Print the MCP endpoint URL for a hostname/port or page URL")]
    Endpoint(EndpointArgs),
}

/// Arguments for `endpoint`.
#[derive(Debug, Clone, Args)]
#[command(
    after_help = "Prints nothing when no endpoint can be derived (e.g. empty hostname).\nExample: endpoint-mcp endpoint --hostname localhost --port 3000"
)]
pub struct EndpointArgs {
    /// Hostname the page is served from.
    #[arg(long)]
    pub hostname: Option<String>,
    /// Port the page is served from.
    #[arg(long)]
    pub port: Option<String>,
    /// Scheme the page is served over (informational; does not change the result).
    #[arg(long)]
    pub scheme: Option<String>,
    /// Full page URL instead of individual parts.
    #[arg(long, conflicts_with_all = ["hostname", "port", "scheme"])]
    pub url: Option<String>,
    /// Print a JSON payload with `url` and `available`.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Endpoint MCP: advertise the MCP endpoint URL for this host",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Select stdio (default), tcp, or http.
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override)?;
        let launch_args = build_launch_args(self.transport, &config_path);

        Ok(LaunchProfile {
            config_path,
            transport: self.transport,
            launch_args,
        })
    }

    /// Parse CLI args into either server launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli(command)),
            None => Ok(ParsedCommand::RunServer(self.build()?)),
        }
    }
}
