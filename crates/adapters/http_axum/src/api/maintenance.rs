//! JSON handlers for the maintenance actions.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Result of an inactive-account cleanup run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub deleted_count: u64,
    pub message: String,
}

/// Possible responses from the clear-data endpoint.
pub enum ClearDataResponse {
    NoContent,
}

impl IntoResponse for ClearDataResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/maintenance/cleanup`
pub async fn cleanup<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<Json<CleanupResponse>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let deleted_count = state.auth_service.delete_inactive().await?;
    Ok(Json(CleanupResponse {
        deleted_count,
        message: format!("Deleted {deleted_count} inactive users"),
    }))
}

/// `POST /api/maintenance/clear-data`
///
/// Forgets installed add-ons and the remembered session. Preferences are
/// deliberately kept; resetting those is its own endpoint.
pub async fn clear_data<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<ClearDataResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    state.addon_service.clear_installed().await?;
    state.session_service.logout().await?;
    Ok(ClearDataResponse::NoContent)
}
