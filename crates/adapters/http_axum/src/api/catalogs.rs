//! JSON handlers for the read-only catalog views.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};
use alcove_domain::catalog::{AppEntry, UpdateEntry};
use alcove_domain::theme::ThemeCatalog;

use crate::error::ApiError;
use crate::state::AppState;

/// Optional search query shared by the list endpoints.
#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// `GET /api/catalogs/apps?q=`
pub async fn apps<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<AppEntry>>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let apps = state.catalog_service.apps().await?;
    let apps = match query.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => apps
            .iter()
            .filter(|app| app.matches_query(q))
            .cloned()
            .collect(),
        None => apps.to_vec(),
    };
    Ok(Json(apps))
}

/// `GET /api/catalogs/updates` — latest first.
pub async fn updates<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<Json<Vec<UpdateEntry>>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let updates = state.catalog_service.updates().await?;
    Ok(Json(updates.to_vec()))
}

/// `GET /api/catalogs/themes`
pub async fn themes<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<Json<ThemeCatalog>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let catalog = state.catalog_service.themes().await?;
    Ok(Json(catalog.clone()))
}
