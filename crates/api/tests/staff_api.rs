//! Staff account management over HTTP.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn create(
    pool: &PgPool,
    token: &str,
    username: &str,
    password: &str,
) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/staff",
        json!({
            "username": username,
            "password": password,
            "full_name": "Zeynep Kaya",
            "job_title": "Resepsiyon Şefi",
        }),
        token,
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_staff_derives_role_and_hides_hash(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = create(&pool, &token, "zeynep", "lobby-shift-7").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "RECEPTION");
    assert!(json["data"].get("password_hash").is_none());

    let app = common::build_test_app(pool);
    let login = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "zeynep", "password": "lobby-shift-7" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_weak_staff_passwords_are_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;

    for password in ["short-1", "onlyletters", "Zeynep-2024"] {
        let response = create(&pool, &token, "zeynep", password).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{password}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reset_password_applies_policy(pool: PgPool) {
    let token = admin_token(&pool).await;
    let staff = common::create_staff(&pool, "murat", "Stok Sorumlusu").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/staff/{}/reset-password", staff.id),
        json!({ "new_password": "murat-depo-1" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/staff/{}/reset-password", staff.id),
        json!({ "new_password": "warehouse-key-9" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let login = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "murat", "password": "warehouse-key-9" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/staff/99999/reset-password",
        json!({ "new_password": "warehouse-key-9" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
