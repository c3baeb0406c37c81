//! JSON handlers for the add-on installer.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};
use alcove_domain::addon::Addon;

use crate::api::catalogs::SearchQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Catalog partitioned into the two views the add-ons page shows.
#[derive(Serialize)]
pub struct AddonListResponse {
    /// Base URL icon paths are resolved against.
    pub site: String,
    pub installed: Vec<Addon>,
    pub available: Vec<Addon>,
}

/// Outcome of an install call.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallResponse {
    pub addon_id: String,
    pub script_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    pub newly_installed: bool,
}

/// Possible responses from the uninstall endpoint.
pub enum UninstallResponse {
    NoContent,
}

impl IntoResponse for UninstallResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/addons?q=`
pub async fn list<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<AddonListResponse>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let catalog = state.catalog_service.addons().await?;
    let installed_set = state.addon_service.installed().await?;
    let (installed, available) = catalog.partition(&installed_set);

    let keep = |addon: &&Addon| match query.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => addon.matches_query(q),
        None => true,
    };

    Ok(Json(AddonListResponse {
        site: catalog.site.clone(),
        installed: installed.into_iter().filter(keep).cloned().collect(),
        available: available.into_iter().filter(keep).cloned().collect(),
    }))
}

/// `POST /api/addons/{id}/install`
pub async fn install<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Path(id): Path<String>,
) -> Result<Json<InstallResponse>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let catalog = state.catalog_service.addons().await?;
    let outcome = state.addon_service.install(catalog, &id).await?;

    Ok(Json(InstallResponse {
        addon_id: outcome.addon_id,
        script_url: outcome.script_url,
        file_size: outcome.file_size,
        newly_installed: outcome.newly_installed,
    }))
}

/// `DELETE /api/addons/{id}`
pub async fn uninstall<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Path(id): Path<String>,
) -> Result<UninstallResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let catalog = state.catalog_service.addons().await?;
    state.addon_service.uninstall(catalog, &id).await?;
    Ok(UninstallResponse::NoContent)
}
