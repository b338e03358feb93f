//! CLI command implementations.

pub mod cards;
pub mod config;
pub mod price;
pub mod url;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use tokio::io::AsyncReadExt;

use crate::context::Context;

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Listing price as shown by the store (e.g. "$1,299.99").
    pub price: String,

    /// Coupons as a JSON array.
    #[arg(long, conflicts_with = "coupons_file")]
    pub coupons: Option<String>,

    /// File holding a JSON array of coupons ("-" for stdin).
    #[arg(long)]
    pub coupons_file: Option<String>,

    /// Currency code, overriding the configured one.
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for the cards command.
#[derive(Args)]
pub struct CardsArgs {
    /// Saved search API response ("-" for stdin).
    pub response: String,

    /// Budget override for this run.
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Show only the first N cards.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the url command.
#[derive(Args)]
pub struct UrlArgs {
    /// Search terms.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Language code, overriding the configured one.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// API base URL, overriding the configured one.
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Read a whole input file, or stdin for "-".
pub(crate) async fn read_input(path: &str, ctx: &Context) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    let path = ctx.resolve_path(path);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
