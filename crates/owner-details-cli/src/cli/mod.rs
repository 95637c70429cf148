//! CLI for the owner details view.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owner_details_core::config::{self, GatewayConfig};

use commands::{run_config_path, run_show};

/// Top-level CLI for the owner details view.
#[derive(Debug, Parser)]
#[command(name = "owner-details")]
#[command(about = "Show a clinic owner's details from the API gateway", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one owner and render the details view.
    Show {
        /// Owner identifier (route parameter).
        owner_id: String,

        /// Gateway root URL; overrides `base_url` from config.toml.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Print the raw owner JSON instead of the details view.
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the config file.
    ConfigPath,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Show {
                owner_id,
                base_url,
                json,
            } => {
                let cfg = with_base_url(config::load_or_init()?, base_url);
                tracing::debug!("loaded config: {:?}", cfg);
                run_show(&cfg, &owner_id, json, &mut std::io::stdout().lock()).await?;
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

/// Applies `--base-url` on top of the loaded config.
pub(crate) fn with_base_url(mut cfg: GatewayConfig, base_url: Option<String>) -> GatewayConfig {
    if let Some(url) = base_url {
        cfg.base_url = url;
    }
    cfg
}

#[cfg(test)]
mod tests;
