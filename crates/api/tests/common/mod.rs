#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hotel_api::auth::jwt::JwtConfig;
use hotel_api::auth::password::hash_password;
use hotel_api::config::ServerConfig;
use hotel_api::router::build_app_router;
use hotel_api::state::AppState;
use hotel_core::permissions::AccessPolicy;
use hotel_db::models::customer::{CreateCustomer, Customer};
use hotel_db::models::room::{CreateRoom, Room};
use hotel_db::models::staff::{CreateStaff, Staff};
use hotel_db::repositories::{CustomerRepo, RoomRepo, StaffRepo};

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Test `ServerConfig` with a fixed JWT secret and the dev CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
    }
}

/// The production router and middleware stack over `pool`, with the
/// standard access policy.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_policy(pool, AccessPolicy::standard())
}

pub fn build_test_app_with_policy(pool: PgPool, access: AccessPolicy) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        access: Arc::new(access),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn delete_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a staff account with [`TEST_PASSWORD`].
pub async fn create_staff(pool: &PgPool, username: &str, job_title: &str) -> Staff {
    let input = CreateStaff {
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        full_name: format!("{username} Test"),
        job_title: job_title.to_string(),
    };
    StaffRepo::create(pool, &input).await.unwrap()
}

/// Create a staff account and log it in, returning the access token.
pub async fn staff_token(pool: &PgPool, username: &str, job_title: &str) -> String {
    create_staff(pool, username, job_title).await;
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn admin_token(pool: &PgPool) -> String {
    staff_token(pool, "admin", "Genel Müdür").await
}

pub async fn reception_token(pool: &PgPool) -> String {
    staff_token(pool, "reception", "Resepsiyonist").await
}

pub async fn operations_token(pool: &PgPool) -> String {
    staff_token(pool, "operations", "Stok Sorumlusu").await
}

pub async fn seed_room(pool: &PgPool, number: &str, nightly_rate: f64) -> Room {
    let input = CreateRoom {
        room_number: number.to_string(),
        room_type: "double".to_string(),
        nightly_rate,
        status_id: None,
        view: None,
        square_meters: None,
    };
    RoomRepo::create(pool, &input).await.unwrap()
}

pub async fn seed_customer(pool: &PgPool, first_name: &str) -> Customer {
    let input = CreateCustomer {
        first_name: first_name.to_string(),
        last_name: "Guest".to_string(),
        national_id: None,
        phone: "+90 555 000 0000".to_string(),
        email: None,
        gender: None,
        address: None,
        notes: None,
    };
    CustomerRepo::create(pool, &input).await.unwrap()
}
