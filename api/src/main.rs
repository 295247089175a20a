use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use savvy_pulse_backend::build_rocket;
use savvy_pulse_backend::config::{mongo_config::setup_mongo, AppConfig};
use savvy_pulse_backend::jwt::TokenIssuer;
use savvy_pulse_backend::store::{DocumentStore, MemoryStore, MongoStore};

#[rocket::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = AppConfig::parse();
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let store: Arc<dyn DocumentStore> = if config.in_memory_store {
        warn!("Using the in-memory store: data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        match connect_mongo(&config).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!("Database error: {:#}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let issuer = TokenIssuer::new(&config.access_token_secret, config.token_ttl_secs);

    // Rocket's own logger stays off; requests are logged through tracing
    let figment = rocket::Config::figment()
        .merge(("address", config.host.clone()))
        .merge(("port", config.port))
        .merge(("log_level", "off"));

    info!("Listening on {}:{}", config.host, config.port);
    if let Err(e) = build_rocket(store, issuer).configure(figment).launch().await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn connect_mongo(config: &AppConfig) -> anyhow::Result<MongoStore> {
    let uri = config.mongo_uri()?;
    let client = setup_mongo(&uri)
        .await
        .context("invalid MongoDB connection settings")?;
    let store = MongoStore::new(&client, &config.db_name);

    info!("Connecting to MongoDB database '{}'...", config.db_name);
    store
        .ping()
        .await
        .with_context(|| format!("cannot reach database '{}'", config.db_name))?;
    info!("Connected to MongoDB");
    Ok(store)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("savvy_pulse={},savvy_pulse_backend={}", level, level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
