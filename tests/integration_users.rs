mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{generate_unique_email, generate_unique_username, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn create_user(pool: &PgPool, username: &str, email: &str, password: &str) -> serde_json::Value {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": password,
                "role": "ADMIN_STAFF",
                "firstName": "Marie",
                "lastName": "Essomba",
                "email": email
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn login(pool: &PgPool, username: &str, password: &str) -> serde_json::Value {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/users/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "username": username, "password": password })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    // login failures still answer 200 with success: false
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_created_user_never_exposes_password(pool: PgPool) {
    let username = generate_unique_username();
    let body = create_user(&pool, &username, &generate_unique_email(), "s3cret-pass").await;

    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["active"], true);
    assert!(body.get("password").is_none());

    // the stored password is a bcrypt hash, not the plaintext
    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = $1")
        .bind(&username)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "s3cret-pass");
    assert!(stored.starts_with("$2"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_username_conflicts(pool: PgPool) {
    let username = generate_unique_username();
    create_user(&pool, &username, &generate_unique_email(), "s3cret-pass").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": "another-pass",
                "role": "TEACHER",
                "firstName": "Jean",
                "lastName": "Mbarga",
                "email": generate_unique_email()
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success_stamps_last_login(pool: PgPool) {
    let username = generate_unique_username();
    let created = create_user(&pool, &username, &generate_unique_email(), "s3cret-pass").await;
    assert!(created["lastLogin"].is_null());

    let body = login(&pool, &username, "s3cret-pass").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["username"], username.as_str());
    assert!(body["user"]["lastLogin"].is_string());
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let username = generate_unique_username();
    create_user(&pool, &username, &generate_unique_email(), "s3cret-pass").await;

    let body = login(&pool, &username, "wrong-pass").await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid password");
    assert!(body.get("user").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let body = login(&pool, "nobody-here", "whatever").await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deactivated_user_cannot_login(pool: PgPool) {
    let username = generate_unique_username();
    let created = create_user(&pool, &username, &generate_unique_email(), "s3cret-pass").await;
    let user_id = created["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/users/{user_id}/deactivate"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = login(&pool, &username, "s3cret-pass").await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Account is deactivated");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_change_password_requires_matching_old(pool: PgPool) {
    let username = generate_unique_username();
    let created = create_user(&pool, &username, &generate_unique_email(), "s3cret-pass").await;
    let user_id = created["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{user_id}/password"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "oldPassword": "not-the-old-one",
                "newPassword": "brand-new-pass"
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{user_id}/password"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "oldPassword": "s3cret-pass",
                "newPassword": "brand-new-pass"
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = login(&pool, &username, "brand-new-pass").await;
    assert_eq!(body["success"], true);
}
