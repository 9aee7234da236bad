use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bestiary")]
#[command(about = "SOAP client for the bestiary class catalogue")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the request timeout, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search classes by name and/or primary attribute
    Search {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        attribute: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every class
    List {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Menu-driven session (default)
    Interactive,
}

impl CliConfig {
    /// Loads the file configuration (or defaults) and applies command line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            tracing::info!("🔧 Endpoint overridden to: {}", endpoint);
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(timeout) = self.timeout {
            tracing::info!("🔧 Timeout overridden to: {}s", timeout);
            config = config.with_timeout_seconds(timeout);
        }
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
