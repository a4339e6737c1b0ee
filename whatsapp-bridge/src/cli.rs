//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BridgeConfig;

#[derive(Parser)]
#[command(name = "whatsapp-bridge")]
#[command(about = "WhatsApp ↔ ticketing platform channel bridge", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP bridge (config from env; port can override PORT).
    Run {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the channel manifest JSON and exit.
    Manifest,
}

/// Load BridgeConfig from environment. If `port` is provided it overrides PORT.
pub fn load_config(port: Option<u16>) -> Result<BridgeConfig> {
    BridgeConfig::load(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_port() {
        let cli = Cli::try_parse_from(["whatsapp-bridge", "run", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { port: Some(8080) }));
    }

    #[test]
    fn test_parse_run_without_port() {
        let cli = Cli::try_parse_from(["whatsapp-bridge", "run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { port: None }));
    }

    #[test]
    fn test_parse_manifest() {
        let cli = Cli::try_parse_from(["whatsapp-bridge", "manifest"]).unwrap();
        assert!(matches!(cli.command, Commands::Manifest));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["whatsapp-bridge", "serve"]).is_err());
    }
}
