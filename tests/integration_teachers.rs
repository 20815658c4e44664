mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_class, create_test_teacher, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn create_teacher_request(email: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/teachers")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "firstName": "Jacques",
                "lastName": "Mbida",
                "email": email,
                "specialization": "Mathématiques"
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_conflicts(pool: PgPool) {
    let email = generate_unique_email();

    let app = setup_test_app(pool.clone());
    let response = app.oneshot(create_teacher_request(&email)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let response = app.oneshot(create_teacher_request(&email)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_teacher_by_email(pool: PgPool) {
    let email = generate_unique_email();
    let app = setup_test_app(pool.clone());
    let response = app.oneshot(create_teacher_request(&email)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let id = body["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/teachers/email/{email}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), id);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/teachers/email/nobody@nowhere.test")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_teacher_classes_lists_homerooms(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool).await;
    let class_id = create_test_class(&pool, "CM1 A").await;
    create_test_class(&pool, "CM1 B").await;

    sqlx::query("UPDATE classes SET teacher_id = $1 WHERE id = $2")
        .bind(teacher_id)
        .bind(class_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/teachers/{teacher_id}/classes"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64().unwrap(), class_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_last_name(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_teacher_request(&generate_unique_email()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/teachers/search?q=mbid")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["lastName"], "Mbida");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_teachers_by_specialization(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_teacher_request(&generate_unique_email()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    // fixture teacher has no specialization
    create_test_teacher(&pool).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/teachers/specialization/Math%C3%A9matiques")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}
