mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn post_notification(pool: &PgPool, user_id: i64, message: &str) -> (StatusCode, serde_json::Value) {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/notifications")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "userId": user_id, "message": message })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_notification_starts_unread(pool: PgPool) {
    let user_id = create_test_user(&pool).await;

    let (status, body) = post_notification(&pool, user_id, "Réunion des parents vendredi").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["read"], false);
    assert_eq!(body["userId"].as_i64().unwrap(), user_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_notification_for_unknown_user_is_not_found(pool: PgPool) {
    let (status, _) = post_notification(&pool, 999999, "message").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_mark_as_read_drops_from_unread_listing(pool: PgPool) {
    let user_id = create_test_user(&pool).await;
    let (_, first) = post_notification(&pool, user_id, "Premier message").await;
    post_notification(&pool, user_id, "Second message").await;
    let first_id = first["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/notifications/{first_id}/read"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["read"], true);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/notifications/user/{user_id}/unread"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["message"], "Second message");

    // the full listing still has both
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/notifications/user/{user_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_notification(pool: PgPool) {
    let user_id = create_test_user(&pool).await;
    let (_, created) = post_notification(&pool, user_id, "à supprimer").await;
    let id = created["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/notifications/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/notifications/user/{user_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body.as_array().unwrap().is_empty());
}
