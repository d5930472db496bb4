//! End-to-end HTTP tests over the in-memory stores.
//!
//! Requests are driven through the full router with `tower::ServiceExt`,
//! so routing, extractors, DTO validation, and error mapping are all
//! exercised without a database or SMTP server.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use contactly_api::{AppState, build_app};
use contactly_auth::password::PasswordHasher;
use contactly_auth::token::ResetTokenIssuer;
use contactly_core::config::AppConfig;
use contactly_core::result::AppResult;
use contactly_core::traits::{Clock, Mailer, SystemClock};
use contactly_database::memory::{MemoryContactStore, MemorySessionStore, MemoryUserStore};
use contactly_service::{AuthService, ContactService};

/// Mailer that accepts everything and delivers nothing.
#[derive(Debug)]
struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Ok(())
    }
}

struct TestApp {
    app: Router,
}

struct TestResponse {
    status: StatusCode,
    body: Value,
}

impl TestApp {
    fn new() -> Self {
        let config = Arc::new(AppConfig::default());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let auth_service = Arc::new(AuthService::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemorySessionStore::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(ResetTokenIssuer::new(&config.auth, clock.clone())),
            Arc::new(NullMailer),
            clock,
            config.auth.clone(),
        ));
        let contact_service = Arc::new(ContactService::new(Arc::new(MemoryContactStore::new())));

        let app = build_app(AppState {
            config,
            auth_service,
            contact_service,
        });

        Self { app }
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, body }
    }

    /// Registers a user and returns the login session payload.
    async fn register_and_login(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({
                    "name": "Test User",
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);

        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["data"].clone()
    }
}

fn as_str(value: &Value) -> &str {
    value.as_str().expect("string field")
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Test User",
                "email": "a@x.com",
                "password": "short",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.register_and_login("a@x.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Other",
                "email": "a@x.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Email in use");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.register_and_login("a@x.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": "wrongpassword" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Email or password is incorrect");
}

#[tokio::test]
async fn test_me_requires_bearer_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("bogus-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_me_and_logout() {
    let app = TestApp::new();
    let session = app.register_and_login("a@x.com", "password123").await;
    let access = as_str(&session["access_token"]);

    let response = app.request("GET", "/api/auth/me", None, Some(access)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "a@x.com");
    assert!(response.body["data"].get("password_hash").is_none());

    let response = app
        .request("POST", "/api/auth/logout", None, Some(access))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // The access token died with the session.
    let response = app.request("GET", "/api/auth/me", None, Some(access)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotates_and_invalidates_old_pair() {
    let app = TestApp::new();
    let session = app.register_and_login("a@x.com", "password123").await;

    let old_pair = json!({
        "session_id": session["session_id"],
        "refresh_token": session["refresh_token"],
    });

    let response = app
        .request("POST", "/api/auth/refresh", Some(old_pair.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rotated = &response.body["data"];
    assert_ne!(rotated["refresh_token"], session["refresh_token"]);
    assert_ne!(rotated["session_id"], session["session_id"]);

    let response = app
        .request("POST", "/api/auth/refresh", Some(old_pair), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Session not found");
}

#[tokio::test]
async fn test_send_reset_email_unknown_address() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/send-reset-email",
            Some(json!({ "email": "ghost@x.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
async fn test_reset_password_rejects_garbage_token() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/reset-password",
            Some(json!({ "token": "not-a-jwt", "password": "password456" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token is expired or invalid");
}

#[tokio::test]
async fn test_contact_crud_flow() {
    let app = TestApp::new();
    let session = app.register_and_login("a@x.com", "password123").await;
    let access = as_str(&session["access_token"]).to_string();

    let response = app
        .request(
            "POST",
            "/api/contacts",
            Some(json!({
                "name": "Bob",
                "phone_number": "+15550001111",
                "contact_type": "work",
            })),
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let contact_id = as_str(&response.body["data"]["id"]).to_string();
    assert_eq!(response.body["data"]["contact_type"], "work");

    let response = app
        .request(
            "PATCH",
            &format!("/api/contacts/{contact_id}"),
            Some(json!({ "is_favourite": true })),
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_favourite"], true);
    assert_eq!(response.body["data"]["name"], "Bob");

    let response = app
        .request(
            "GET",
            "/api/contacts?page=1&per_page=10&sort_by=name",
            None,
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 1);
    assert_eq!(response.body["data"]["items"][0]["name"], "Bob");

    let response = app
        .request(
            "DELETE",
            &format!("/api/contacts/{contact_id}"),
            None,
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "GET",
            &format!("/api/contacts/{contact_id}"),
            None,
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Contact not found");
}

#[tokio::test]
async fn test_contacts_are_isolated_per_user() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice@x.com", "password123").await;
    let alice_access = as_str(&alice["access_token"]).to_string();

    let response = app
        .request(
            "POST",
            "/api/contacts",
            Some(json!({ "name": "Secret", "phone_number": "+15550001111" })),
            Some(&alice_access),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let contact_id = as_str(&response.body["data"]["id"]).to_string();

    let mallory = app.register_and_login("mallory@x.com", "password123").await;
    let mallory_access = as_str(&mallory["access_token"]).to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/contacts/{contact_id}"),
            None,
            Some(&mallory_access),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/contacts", None, Some(&mallory_access))
        .await;
    assert_eq!(response.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_contact_list_rejects_unknown_sort_field() {
    let app = TestApp::new();
    let session = app.register_and_login("a@x.com", "password123").await;
    let access = as_str(&session["access_token"]).to_string();

    let response = app
        .request(
            "GET",
            "/api/contacts?sort_by=password_hash",
            None,
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
