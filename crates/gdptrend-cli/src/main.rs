//! GDPTrend CLI entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use gdptrend_cli::cli::{Args, Command};
use gdptrend_cli::config::GdptrendConfig;
use gdptrend_cli::handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gdptrend=debug".into()),
        )
        .init();

    let args = Args::parse();
    let config = GdptrendConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Serve { memory } => handlers::cmd_serve(&config, memory).await?,
        Command::Add { year, value, country } => {
            let store = handlers::build_store(&config, false)?;
            handlers::cmd_add(store.as_ref(), year, value, country).await?;
        }
        Command::List => {
            let store = handlers::build_store(&config, false)?;
            handlers::cmd_list(store.as_ref()).await?;
        }
        Command::SetValue { id, value } => {
            let store = handlers::build_store(&config, false)?;
            handlers::cmd_set_value(store.as_ref(), id, value).await?;
        }
        Command::Remove { id } => {
            let store = handlers::build_store(&config, false)?;
            handlers::cmd_remove(store.as_ref(), id).await?;
        }
        Command::Analyze => {
            let store = handlers::build_store(&config, false)?;
            let summarizer = handlers::build_summarizer(&config)?;
            handlers::cmd_analyze(store.as_ref(), &summarizer).await?;
        }
        Command::Config { action } => {
            handlers::cmd_config(args.config.as_deref(), action)?;
        }
    }

    Ok(())
}
