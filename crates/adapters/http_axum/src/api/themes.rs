//! JSON handler for theme selection.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for theme selection.
#[derive(Deserialize)]
pub struct SelectThemeRequest {
    pub id: String,
}

/// Possible responses from the select endpoint.
pub enum SelectResponse {
    NoContent,
}

impl IntoResponse for SelectResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/themes/select`
pub async fn select<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Json(req): Json<SelectThemeRequest>,
) -> Result<SelectResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let catalog = state.catalog_service.themes().await?;
    state.theme_service.select_theme(catalog, &req.id).await?;
    Ok(SelectResponse::NoContent)
}
