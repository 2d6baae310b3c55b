//! Server configuration resolution
//!
//! Bind address is resolved in priority order:
//! 1. Command-line argument (highest priority; clap also reads the
//!    NBI_HOST / NBI_PORT environment variables)
//! 2. TOML config file (--config path, or ~/.config/nbi/config.toml)
//! 3. Compiled defaults (fallback)

use std::path::PathBuf;

use clap::Parser;
use nbi_core::{Error, Result};
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5780;

/// Command-line arguments for nbi-web
#[derive(Debug, Default, Parser)]
#[command(name = "nbi-web", about = "Next Business Idea web service")]
pub struct Cli {
    /// Host address to bind
    #[arg(long, env = "NBI_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long, env = "NBI_PORT")]
    pub port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long, env = "NBI_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Optional keys read from the TOML config file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
}

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve configuration from CLI/env, config file, and defaults
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = load_file_config(cli.config.clone())?;

        Ok(Self {
            host: cli
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(file.port).unwrap_or(DEFAULT_PORT),
        })
    }

    /// Address string suitable for TcpListener::bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load the config file if one exists.
///
/// An explicitly passed path must exist and parse; the default location is
/// optional and silently skipped when absent.
fn load_file_config(explicit: Option<PathBuf>) -> Result<FileConfig> {
    let (path, required) = match explicit {
        Some(path) => (Some(path), true),
        None => (default_config_path(), false),
    };

    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    if !path.exists() {
        if required {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(FileConfig::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// Default config file location (~/.config/nbi/config.toml on Linux)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("nbi").join("config.toml"))
}
