//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem,
/// and a permissive [`CorsLayer`] matching the original any-origin edge
/// functions.
pub fn build<R, K, S, C, P>(state: AppState<R, K, S, C, P>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
