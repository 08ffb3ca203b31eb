//! Command handlers: wire config into collaborators and run one operation.

use crate::cli::ConfigAction;
use crate::config::GdptrendConfig;
use gdptrend_analysis::{ClaudeModel, TrendSummarizer};
use gdptrend_api::{AppState, build_router};
use gdptrend_auth::{AuthConfig, SharedSecretValidator};
use gdptrend_core::{
    Error, RawRecordInput, RecordId, Result, current_year, validate_submission,
};
use gdptrend_store::{HttpStore, MemoryStore, RecordStore, StoreConfig};
use std::sync::Arc;

/// Builds the record store gateway named by the config.
///
/// `force_memory` is the `serve --memory` escape hatch for local runs.
pub fn build_store(config: &GdptrendConfig, force_memory: bool) -> Result<Arc<dyn RecordStore>> {
    if force_memory || config.store.backend == "memory" {
        tracing::info!("using in-memory record store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    if config.store.backend != "http" {
        return Err(Error::config(format!(
            "unknown store backend '{}' (expected 'memory' or 'http')",
            config.store.backend
        )));
    }
    if config.store.base_url.is_empty() {
        return Err(Error::config(
            "store.base_url is required for the http backend",
        ));
    }

    let mut store_config =
        StoreConfig::new(&config.store.base_url, &config.store.collection);
    if let Ok(token) = std::env::var("GDPTREND_STORE_TOKEN") {
        store_config = store_config.with_token(token);
    }

    tracing::info!(base_url = %config.store.base_url, "using HTTP record store");
    Ok(Arc::new(HttpStore::new(store_config)))
}

/// Builds the summarizer over the configured completion model.
pub fn build_summarizer(config: &GdptrendConfig) -> Result<TrendSummarizer> {
    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .map_err(|_| Error::config("ANTHROPIC_API_KEY environment variable must be set"))?;

    tracing::info!(model = %config.model.model, "using Claude completion model");
    let model = ClaudeModel::new(api_key, &config.model.model);
    Ok(TrendSummarizer::new(Arc::new(model)))
}

/// `gdptrend serve` — run the API server until stopped.
pub async fn cmd_serve(config: &GdptrendConfig, memory: bool) -> Result<()> {
    let store = build_store(config, memory)?;
    let summarizer = build_summarizer(config)?;
    let state = AppState::new(store, summarizer);

    let (auth, secret) = if config.auth.enabled {
        let secret = std::env::var("GDPTREND_AUTH_SECRET").map_err(|_| {
            Error::config("GDPTREND_AUTH_SECRET must be set when auth.enabled is true")
        })?;
        (AuthConfig::enabled(), secret)
    } else {
        (AuthConfig::default(), String::new())
    };
    let validator = Arc::new(SharedSecretValidator::new(secret));

    let router = build_router(state, validator, auth);
    gdptrend_api::serve(&config.server.bind, router).await
}

/// `gdptrend add` — validate a submission and create the record.
pub async fn cmd_add(
    store: &dyn RecordStore,
    year: String,
    value: String,
    country: String,
) -> Result<()> {
    let raw = RawRecordInput { year, value, country };
    let draft = validate_submission(&raw, current_year()).map_err(Error::Validation)?;

    let record = store.create(draft).await?;
    println!("Added record {} for {}.", record.id, record.year);
    Ok(())
}

/// `gdptrend list` — print the collection ascending by year.
pub async fn cmd_list(store: &dyn RecordStore) -> Result<()> {
    let records = store.list().await?;
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }

    println!("{:<38} {:>6} {:>16}  {}", "ID", "YEAR", "VALUE", "COUNTRY");
    for record in records {
        println!(
            "{:<38} {:>6} {:>16}  {}",
            record.id, record.year, record.value, record.country
        );
    }
    Ok(())
}

/// `gdptrend set-value` — overwrite a record's value.
pub async fn cmd_set_value(store: &dyn RecordStore, id: String, value: f64) -> Result<()> {
    let id = RecordId::new(id).ok_or_else(|| Error::not_found(""))?;
    let record = store.update_value(&id, value).await?;
    println!("Updated record {}: value is now {}.", record.id, record.value);
    Ok(())
}

/// `gdptrend remove` — delete a record by id.
pub async fn cmd_remove(store: &dyn RecordStore, id: String) -> Result<()> {
    let id = RecordId::new(id).ok_or_else(|| Error::not_found(""))?;
    store.delete(&id).await?;
    println!("Deleted record {id}.");
    Ok(())
}

/// `gdptrend analyze` — fetch the collection and print the trend summary.
pub async fn cmd_analyze(store: &dyn RecordStore, summarizer: &TrendSummarizer) -> Result<()> {
    let records = store.list().await?;
    let points: Vec<_> = records.iter().map(|r| r.to_point()).collect();

    let result = summarizer.summarize(&points).await?;
    println!("{}", result.summary);
    Ok(())
}

/// `gdptrend config path|init`.
pub fn cmd_config(explicit: Option<&str>, action: ConfigAction) -> Result<()> {
    let path = GdptrendConfig::resolve_path(explicit)
        .ok_or_else(|| Error::config("could not determine config directory for this platform"))?;

    match action {
        ConfigAction::Path => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist — run `gdptrend config init` to create it)");
            }
            Ok(())
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(Error::config(format!(
                    "config file already exists at {}. Use --force to overwrite.",
                    path.display()
                )));
            }
            GdptrendConfig::default().write_to(&path)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}
