// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::Role,
    dashboard::{Application, Drive, FeedbackNote, Reminder, Stat, StatValue, StatsResponse, Trend},
    state::AppState,
    storage::StoredProfile,
};

pub mod health;
pub mod mentor;
pub mod placement;
pub mod profiles;
pub mod student;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health/", get(health::health))
        .route("/auth/register-profile/", post(profiles::register_profile))
        .route("/auth/me/", get(profiles::current_user))
        .route("/student/dashboard/", get(student::dashboard))
        .route("/student/applications/", get(student::applications))
        .route("/student/reminders/", get(student::reminders))
        .route("/mentor/dashboard/", get(mentor::dashboard))
        .route("/mentor/feedback/", get(mentor::feedback))
        .route("/placement/dashboard/", get(placement::dashboard))
        .route("/placement/drives/", get(placement::drives))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        profiles::register_profile,
        profiles::current_user,
        student::dashboard,
        student::applications,
        student::reminders,
        mentor::dashboard,
        mentor::feedback,
        placement::dashboard,
        placement::drives
    ),
    components(
        schemas(
            health::HealthResponse,
            profiles::RegisterProfileRequest,
            profiles::RegisterProfileResponse,
            profiles::CurrentUserResponse,
            student::ApplicationsResponse,
            student::RemindersResponse,
            mentor::FeedbackResponse,
            placement::DrivesResponse,
            StoredProfile,
            Role,
            StatsResponse,
            Stat,
            StatValue,
            Trend,
            Application,
            Reminder,
            FeedbackNote,
            Drive
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Auth", description = "Profile registration and identity"),
        (name = "Student", description = "Student dashboard reads"),
        (name = "Mentor", description = "Mentor dashboard reads"),
        (name = "Placement", description = "Placement cell dashboard reads")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::StaticDashboards;
    use crate::state::AuthConfig;
    use crate::storage::ProfileDatabase;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (Router, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db = ProfileDatabase::open(&dir.path().join("profiles.redb"))
            .expect("Failed to open database");
        let state = AppState::new(db, StaticDashboards).with_auth_config(AuthConfig {
            decode_secret: Some("test-anon-key".to_string()),
            verify_signatures: false,
        });
        (router(state), dir)
    }

    /// Forge an unsigned JWT carrying the given claim payload.
    fn forge_token(claims_json: &str) -> String {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        let header_b64 = URL_SAFE_NO_PAD.encode(header.as_bytes());
        let claims_b64 = URL_SAFE_NO_PAD.encode(claims_json.as_bytes());
        format!("{header_b64}.{claims_b64}.fake_signature")
    }

    fn get_request(path: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_json(path: &str, token: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_needs_no_auth() {
        let (app, _dir) = test_app();

        let response = app.oneshot(get_request("/api/health/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"status": "ok", "service": "Campus Portal API"})
        );
    }

    #[tokio::test]
    async fn register_then_update_round_trip() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"sub":"u1","email":"a@x.com"}"#);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/register-profile/",
                &token,
                r#"{"role":"student"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["created"], true);
        assert_eq!(body["profile"]["role"], "student");
        assert_eq!(body["profile"]["email"], "a@x.com");
        let created_at = body["profile"]["created_at"].clone();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/register-profile/",
                &token,
                r#"{"role":"mentor"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["created"], false);
        assert_eq!(body["profile"]["role"], "mentor");
        assert_eq!(body["profile"]["created_at"], created_at);
    }

    #[tokio::test]
    async fn register_rejects_invalid_role_with_400() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"sub":"u1","email":"a@x.com"}"#);

        let response = app
            .oneshot(post_json(
                "/api/auth/register-profile/",
                &token,
                r#"{"role":"wizard","first_name":"A"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "Invalid role."})
        );
    }

    #[tokio::test]
    async fn register_without_any_email_gets_400() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"sub":"u1"}"#);

        let response = app
            .oneshot(post_json(
                "/api/auth/register-profile/",
                &token,
                r#"{"role":"student"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "Email is required."})
        );
    }

    #[tokio::test]
    async fn me_without_registration_returns_null_profile() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"sub":"u9","email":"n@x.com","role":"authenticated"}"#);

        let response = app
            .oneshot(get_request("/api/auth/me/", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["supabase_id"], "u9");
        assert_eq!(body["email"], "n@x.com");
        assert_eq!(body["role"], "authenticated");
        assert_eq!(body["profile"], Value::Null);
    }

    #[tokio::test]
    async fn me_after_registration_uses_profile_role() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"sub":"u1","email":"a@x.com","role":"authenticated"}"#);

        app.clone()
            .oneshot(post_json(
                "/api/auth/register-profile/",
                &token,
                r#"{"role":"placement"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("/api/auth/me/", Some(&token)))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["role"], "placement");
        assert_eq!(body["profile"]["role"], "placement");
    }

    #[tokio::test]
    async fn protected_routes_reject_anonymous_requests() {
        let (app, _dir) = test_app();

        for path in [
            "/api/auth/me/",
            "/api/student/dashboard/",
            "/api/student/applications/",
            "/api/student/reminders/",
            "/api/mentor/dashboard/",
            "/api/mentor/feedback/",
            "/api/placement/dashboard/",
            "/api/placement/drives/",
        ] {
            let response = app.clone().oneshot(get_request(path, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "path {path}");
        }
    }

    #[tokio::test]
    async fn token_without_subject_gets_401() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"email":"a@x.com"}"#);

        let response = app
            .oneshot(get_request("/api/auth/me/", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["code"], "missing_subject");
    }

    #[tokio::test]
    async fn dashboards_serve_fixed_payloads_when_authenticated() {
        let (app, _dir) = test_app();
        let token = forge_token(r#"{"user_id":"u2"}"#);

        let response = app
            .clone()
            .oneshot(get_request("/api/placement/dashboard/", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["stats"].as_array().unwrap().len(), 4);
        assert_eq!(body["stats"][2]["value"], "6.2 LPA");

        let response = app
            .oneshot(get_request("/api/student/applications/", Some(&token)))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["applications"][0]["statusColor"], "#fbbf24");
    }
}
