//! End-to-end smoke tests for the full alcoved stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! services, static catalog source, virtual presentation surface) and
//! exercises the HTTP layer via `tower::ServiceExt::oneshot` — no TCP port
//! is bound.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use alcove_adapter_http_axum::router;
use alcove_adapter_http_axum::state::AppState;
use alcove_adapter_storage_sqlite_sqlx::{Config, SqliteKvStore, SqliteUserRepository};
use alcove_adapter_virtual::{InMemoryKvStore, StaticCatalogSource, VirtualPresentation};
use alcove_app::applicator::SettingsApplicator;
use alcove_app::services::addon_service::AddonService;
use alcove_app::services::auth_service::AuthService;
use alcove_app::services::catalog_service::CatalogService;
use alcove_app::services::preference_service::PreferenceService;
use alcove_app::services::session_service::SessionService;
use alcove_app::services::theme_service::ThemeService;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let source = Arc::new(StaticCatalogSource::default());
    let presentation = Arc::new(VirtualPresentation::default());

    let auth_service = Arc::new(AuthService::new(SqliteUserRepository::new(pool.clone())));
    let preference_service = Arc::new(PreferenceService::new(SqliteKvStore::new(pool.clone())));
    let applicator = Arc::new(SettingsApplicator::new(Arc::clone(&presentation)));
    let theme_service = Arc::new(ThemeService::new(
        Arc::clone(&preference_service),
        Arc::clone(&presentation),
    ));
    let addon_service = Arc::new(
        AddonService::new(
            SqliteKvStore::new(pool.clone()),
            Arc::clone(&source),
            Arc::clone(&presentation),
        )
        .with_step_delay(Duration::ZERO),
    );
    let catalog_service = Arc::new(CatalogService::new(source));
    let session_service = Arc::new(SessionService::new(
        SqliteKvStore::new(pool),
        InMemoryKvStore::default(),
    ));

    let state = AppState::new(
        auth_service,
        preference_service,
        applicator,
        theme_service,
        addon_service,
        catalog_service,
        session_service,
    );

    router::build(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_signup_with_two_char_username() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ab","secretKey":"12345678"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("between 3 and 20"));
}

#[tokio::test]
async fn should_create_account_without_echoing_credentials() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["username"], "ada");
    assert!(body["user"].get("secretKey").is_none());
    assert!(body["user"].get("secretKeyHash").is_none());
}

#[tokio::test]
async fn should_conflict_on_duplicate_username() {
    let app = app().await;
    let signup = || {
        json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        )
    };

    let first = app.clone().oneshot(signup()).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(signup()).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_reject_login_with_wrong_key_using_generic_message() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"username":"ada","secretKey":"wrong key!!"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    // Same message a missing user gets: no username enumeration.
    assert_eq!(body["error"], "invalid username or secret key");
}

#[tokio::test]
async fn should_login_and_remember_session() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"username":"ada","secretKey":"open sesame","rememberMe":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["username"], "ada");
    assert_eq!(body["user"]["secretKey"], "open sesame");

    let session = app.oneshot(get("/api/auth/session")).await.unwrap();
    let body = body_json(session).await;
    assert_eq!(body["user"]["username"], "ada");
}

#[tokio::test]
async fn should_forget_session_on_logout() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"username":"ada","secretKey":"open sesame","rememberMe":true}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request("POST", "/api/auth/logout"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let session = app.oneshot(get("/api/auth/session")).await.unwrap();
    let body = body_json(session).await;
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn should_delete_account_and_invalidate_login() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"username":"ada","secretKey":"open sesame","rememberMe":true}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/auth/account"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let login = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_account_deletion_without_session() {
    let resp = app()
        .await
        .oneshot(empty_request("DELETE", "/api/auth/account"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_default_preferences() {
    let resp = app().await.oneshot(get("/api/preferences")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["fontSize"], "medium");
    assert_eq!(body["reducedMotion"], false);
    assert_eq!(body["generalNotifications"], true);
}

#[tokio::test]
async fn should_persist_saved_preferences() {
    let app = app().await;
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/preferences",
            r#"{"fontSize":"large","reducedMotion":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(app.oneshot(get("/api/preferences")).await.unwrap()).await;
    assert_eq!(body["fontSize"], "large");
    assert_eq!(body["reducedMotion"], true);
    // Unspecified fields took their defaults.
    assert_eq!(body["highContrast"], false);
}

#[tokio::test]
async fn should_reset_preferences_but_keep_notification_permission() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/preferences",
            r#"{"fontSize":"small","notificationsEnabled":true}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request("POST", "/api/preferences/reset"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(app.oneshot(get("/api/preferences")).await.unwrap()).await;
    assert_eq!(body["fontSize"], "medium");
    assert_eq!(body["notificationsEnabled"], true);
    assert_eq!(body["selectedTheme"], "classic");
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_theme_catalog() {
    let resp = app()
        .await
        .oneshot(get("/api/catalogs/themes"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["main-theme"], "classic");
    assert!(body["themes"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn should_select_theme_and_persist_selection() {
    let app = app().await;
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/themes/select",
            r#"{"id":"midnight"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body = body_json(app.oneshot(get("/api/preferences")).await.unwrap()).await;
    assert_eq!(body["selectedTheme"], "midnight");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_theme() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/themes/select",
            r#"{"id":"no-such-theme"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Add-ons
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_install_addon_exactly_once() {
    let app = app().await;

    let before = body_json(app.clone().oneshot(get("/api/addons")).await.unwrap()).await;
    assert_eq!(before["installed"].as_array().unwrap().len(), 0);
    assert_eq!(before["available"].as_array().unwrap().len(), 1);

    let install = app
        .clone()
        .oneshot(empty_request("POST", "/api/addons/sparkles/install"))
        .await
        .unwrap();
    assert_eq!(install.status(), StatusCode::OK);
    let outcome = body_json(install).await;
    assert_eq!(outcome["addonId"], "sparkles");
    assert_eq!(outcome["newlyInstalled"], true);
    assert_eq!(outcome["fileSize"], "41.3kb");

    // Second install is a membership no-op.
    let again = app
        .clone()
        .oneshot(empty_request("POST", "/api/addons/sparkles/install"))
        .await
        .unwrap();
    let outcome = body_json(again).await;
    assert_eq!(outcome["newlyInstalled"], false);

    let after = body_json(app.oneshot(get("/api/addons")).await.unwrap()).await;
    assert_eq!(after["installed"].as_array().unwrap().len(), 1);
    assert_eq!(after["available"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_uninstall_addon() {
    let app = app().await;
    app.clone()
        .oneshot(empty_request("POST", "/api/addons/sparkles/install"))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/addons/sparkles"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body = body_json(app.oneshot(get("/api/addons")).await.unwrap()).await;
    assert_eq!(body["installed"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_addon() {
    let resp = app()
        .await
        .oneshot(empty_request("POST", "/api/addons/no-such-addon/install"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_filter_apps_by_search_query() {
    let app = app().await;

    let all = body_json(app.clone().oneshot(get("/api/catalogs/apps")).await.unwrap()).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let hit = body_json(
        app.clone()
            .oneshot(get("/api/catalogs/apps?q=notes"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(hit.as_array().unwrap().len(), 1);

    let miss = body_json(app.oneshot(get("/api/catalogs/apps?q=zzz")).await.unwrap()).await;
    assert_eq!(miss.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_serve_updates_feed() {
    let resp = app()
        .await
        .oneshot(get("/api/catalogs/updates"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body[0]["version"], "1.0.0");
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_zero_deletions_for_active_accounts() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            r#"{"username":"ada","secretKey":"open sesame"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(empty_request("POST", "/api/maintenance/cleanup"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["deletedCount"], 0);
    assert_eq!(body["message"], "Deleted 0 inactive users");
}

#[tokio::test]
async fn should_clear_addons_and_session_but_keep_preferences() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/preferences",
            r#"{"fontSize":"large"}"#,
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(empty_request("POST", "/api/addons/sparkles/install"))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request("POST", "/api/maintenance/clear-data"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let addons = body_json(app.clone().oneshot(get("/api/addons")).await.unwrap()).await;
    assert_eq!(addons["installed"].as_array().unwrap().len(), 0);

    let prefs = body_json(app.oneshot(get("/api/preferences")).await.unwrap()).await;
    assert_eq!(prefs["fontSize"], "large");
}
