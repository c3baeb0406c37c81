//! JSON handlers for the preference record.

use axum::Json;
use axum::extract::State;

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};
use alcove_domain::preferences::PreferenceRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/preferences`
pub async fn get_preferences<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<Json<PreferenceRecord>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let record = state.preference_service.load().await?;
    Ok(Json(record))
}

/// `PUT /api/preferences`
///
/// Missing fields take their defaults (the record is one blob, not a patch
/// protocol). The saved record is applied to the presentation surface before
/// the response is returned.
pub async fn put_preferences<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Json(record): Json<PreferenceRecord>,
) -> Result<Json<PreferenceRecord>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    state.preference_service.save(&record).await?;
    state.applicator.apply(&record);
    Ok(Json(record))
}

/// `POST /api/preferences/reset`
///
/// Restores defaults, selects the catalog default theme, and keeps the
/// notification permission flag.
pub async fn reset<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<Json<PreferenceRecord>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let catalog = state.catalog_service.themes().await?;
    let record = state
        .preference_service
        .reset(&catalog.default_theme)
        .await?;
    state.applicator.apply(&record);
    state
        .theme_service
        .select_theme(catalog, &record.selected_theme)
        .await?;
    Ok(Json(record))
}
