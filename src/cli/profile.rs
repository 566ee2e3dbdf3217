//! LaunchProfile and config path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::debug;

const DEFAULT_CONFIG: &str = "config.toml";
const MCP_CONFIG_ENV: &str = "MCP_CONFIG_PATH";

/// MCP transport mode.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TransportMode {
    Stdio,
    Tcp,
    /// Landing page plus MCP over streamable HTTP at `/mcp`.
    Http,
}

impl TransportMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Stdio => "stdio",
            TransportMode::Tcp => "tcp",
            TransportMode::Http => "http",
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub transport: TransportMode,
    pub launch_args: Vec<String>,
}

/// Resolve config path in the order: CLI override → env var → default.
///
/// A blank `MCP_CONFIG_PATH` counts as unset.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let (path, source) = match override_path {
        Some(path) => (path, "cli"),
        None => match env::var_os(MCP_CONFIG_ENV)
            .filter(|value| !value.to_string_lossy().trim().is_empty())
        {
            Some(value) => (PathBuf::from(value), "env"),
            None => (PathBuf::from(DEFAULT_CONFIG), "default"),
        },
    };
    debug!(
        target: "endpoint_mcp::config",
        path = %path.display(),
        source,
        env = MCP_CONFIG_ENV,
        "Resolved configuration path"
    );

    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(transport: TransportMode, config: &Path) -> Vec<String> {
    vec![
        format!("--transport={}", transport.as_str()),
        format!("--config={}", config.display()),
    ]
}
