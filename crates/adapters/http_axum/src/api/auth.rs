//! JSON handlers for login, signup, session, and account deletion.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use alcove_app::ports::{CatalogSource, KvStore, Presentation, UserRepository};
use alcove_domain::error::AlcoveError;
use alcove_domain::id::UserId;
use alcove_domain::user::{SessionUser, StorageScope};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for login.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub secret_key: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Request body for signup.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub secret_key: String,
}

/// `{user}` envelope carrying the logged-in identity.
#[derive(Serialize)]
pub struct SessionEnvelope {
    pub user: SessionUser,
}

/// Signup echo: the account without any credential material.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub id: UserId,
    pub username: String,
}

/// `{user}` envelope carrying the freshly created identity.
#[derive(Serialize)]
pub struct SignupEnvelope {
    pub user: CreatedUser,
}

/// `{user: ...|null}` envelope for the session probe.
#[derive(Serialize)]
pub struct MaybeSessionEnvelope {
    pub user: Option<SessionUser>,
}

/// Possible responses from the login endpoint.
pub enum LoginResponse {
    Ok(Json<SessionEnvelope>),
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the signup endpoint.
pub enum SignupResponse {
    Ok(Json<SignupEnvelope>),
}

impl IntoResponse for SignupResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the logout and account-deletion endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/auth/login`
pub async fn login<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Json(req): Json<LoginRequest>,
) -> Result<LoginResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let user = state
        .auth_service
        .login(&req.username, &req.secret_key)
        .await?;

    let scope = if req.remember_me {
        StorageScope::Persistent
    } else {
        StorageScope::Session
    };
    state.session_service.store(&user, scope).await?;

    Ok(LoginResponse::Ok(Json(SessionEnvelope { user })))
}

/// `POST /api/auth/signup`
pub async fn signup<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
    Json(req): Json<SignupRequest>,
) -> Result<SignupResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let user = state
        .auth_service
        .signup(&req.username, &req.secret_key)
        .await?;

    Ok(SignupResponse::Ok(Json(SignupEnvelope {
        user: CreatedUser {
            id: user.id,
            username: user.username,
        },
    })))
}

/// `GET /api/auth/session`
pub async fn session<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<Json<MaybeSessionEnvelope>, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let user = state.session_service.current().await?;
    Ok(Json(MaybeSessionEnvelope { user }))
}

/// `POST /api/auth/logout`
pub async fn logout<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<NoContentResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    state.session_service.logout().await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /api/auth/account`
///
/// Deletes the remembered account and logs out. Without a remembered user
/// there is nothing to delete, which reads as unauthorized.
pub async fn delete_account<R, K, S, C, P>(
    State(state): State<AppState<R, K, S, C, P>>,
) -> Result<NoContentResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    K: KvStore + Send + Sync + 'static,
    S: KvStore + Send + Sync + 'static,
    C: CatalogSource + Send + Sync + 'static,
    P: Presentation + Send + Sync + 'static,
{
    let user = state
        .session_service
        .current()
        .await?
        .ok_or(AlcoveError::Unauthorized)?;

    state.auth_service.delete_account(user.id).await?;
    state.session_service.logout().await?;
    Ok(NoContentResponse::NoContent)
}
