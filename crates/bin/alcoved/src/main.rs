//! # alcoved — alcove portal daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct adapter implementations (storage, fetch, presentation)
//! - Construct application services, injecting adapters via port traits
//! - Restore persisted preferences and theme on startup
//! - Run the inactive-account cleanup job on a fixed interval
//! - Build the axum router, bind to a TCP port, and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use alcove_adapter_fetch_reqwest::HttpCatalogSource;
use alcove_adapter_http_axum::state::AppState;
use alcove_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteKvStore, SqliteUserRepository};
use alcove_adapter_virtual::{InMemoryKvStore, VirtualPresentation};
use alcove_app::applicator::SettingsApplicator;
use alcove_app::services::addon_service::AddonService;
use alcove_app::services::auth_service::AuthService;
use alcove_app::services::catalog_service::CatalogService;
use alcove_app::services::preference_service::PreferenceService;
use alcove_app::services::session_service::SessionService;
use alcove_app::services::theme_service::ThemeService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Adapters
    let user_repo = SqliteUserRepository::new(pool.clone());
    let source = Arc::new(HttpCatalogSource::new(config.endpoints()));
    let presentation = Arc::new(VirtualPresentation::default());

    // Services
    let auth_service = Arc::new(AuthService::new(user_repo));
    let preference_service = Arc::new(PreferenceService::new(SqliteKvStore::new(pool.clone())));
    let applicator = Arc::new(SettingsApplicator::new(Arc::clone(&presentation)));
    let theme_service = Arc::new(ThemeService::new(
        Arc::clone(&preference_service),
        Arc::clone(&presentation),
    ));
    let addon_service = Arc::new(AddonService::new(
        SqliteKvStore::new(pool.clone()),
        Arc::clone(&source),
        Arc::clone(&presentation),
    ));
    let catalog_service = Arc::new(CatalogService::new(Arc::clone(&source)));
    let session_service = Arc::new(SessionService::new(
        SqliteKvStore::new(pool),
        InMemoryKvStore::default(),
    ));

    // Startup restore: re-apply persisted preferences, then re-inject the
    // selected theme. Remote-data problems only skip the theme.
    let record = preference_service.load().await?;
    applicator.apply(&record);
    match catalog_service.themes().await {
        Ok(catalog) => {
            if let Err(err) = theme_service.restore(catalog).await {
                tracing::warn!(error = %err, "theme restore failed, skipping");
            }
        }
        Err(err) => tracing::warn!(error = %err, "theme catalog unavailable, skipping restore"),
    }

    // Background cleanup job
    if config.cleanup.enabled {
        let auth = Arc::clone(&auth_service);
        let interval = Duration::from_secs(config.cleanup.interval_secs);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(err) = auth.delete_inactive().await {
                    tracing::warn!(error = %err, "inactive account cleanup failed");
                }
            }
        });
    }

    // HTTP
    let state = AppState::new(
        auth_service,
        preference_service,
        applicator,
        theme_service,
        addon_service,
        catalog_service,
        session_service,
    );
    let app = alcove_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "alcoved listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
