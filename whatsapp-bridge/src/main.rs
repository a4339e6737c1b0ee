//! Binary for the WhatsApp ↔ ticketing-platform bridge.

use anyhow::Result;
use clap::Parser;
use whatsapp_bridge::{load_config, run_bridge, Cli, Commands, Manifest};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { port } => {
            let config = load_config(port)?;
            run_bridge(config).await
        }
        Commands::Manifest => {
            println!("{}", serde_json::to_string_pretty(&Manifest::bridge())?);
            Ok(())
        }
    }
}
