mod auth;
mod bot;
mod cli;
mod config;
mod error;
mod grammar;
mod llm;
mod modes;
mod prompt;
mod quiz;
mod session;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use llm::CompletionClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli).with_context(|| "invalid configuration")?;
    let client = CompletionClient::new(
        config.openai_key.clone(),
        config.model.clone(),
        config.base_url.clone(),
        Duration::from_secs(config.timeout_seconds),
    )?;

    tracing::info!(
        model = %config.model,
        allowed_users = config.allowed_user_ids.len(),
        "starting bot"
    );
    bot::run(config, client).await
}
