mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_class, create_test_student, create_test_teacher, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn create_class_request(name: &str, level: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/classes")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": name,
                "level": level,
                "section": "PRIMAIRE",
                "language": "FRANCOPHONE",
                "academicYear": "2025-2026",
                "maxCapacity": 30
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_class_tuple_conflicts(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app.oneshot(create_class_request("CM2 B", "CM2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let response = app.oneshot(create_class_request("CM2 B", "CM2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // a single differing field makes a distinct class
    let app = setup_test_app(pool.clone());
    let response = app.oneshot(create_class_request("CM2 B", "CM1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_class_with_students_refused(pool: PgPool) {
    let class_id = create_test_class(&pool, "CE1 A").await;
    create_test_student(&pool, Some(class_id)).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/classes/{class_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("students"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_empty_class(pool: PgPool) {
    let class_id = create_test_class(&pool, "CE2 A").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/classes/{class_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_homeroom_teacher(pool: PgPool) {
    let class_id = create_test_class(&pool, "CP B").await;
    let teacher_id = create_test_teacher(&pool).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/classes/{class_id}/assign-teacher/{teacher_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["teacherId"].as_i64().unwrap(), teacher_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_unknown_teacher_is_not_found(pool: PgPool) {
    let class_id = create_test_class(&pool, "CP C").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/classes/{class_id}/assign-teacher/999999"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_statistics_counts_enrollment(pool: PgPool) {
    let class_id = create_test_class(&pool, "SIL A").await;
    create_test_student(&pool, Some(class_id)).await;
    create_test_student(&pool, Some(class_id)).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/classes/{class_id}/statistics"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["studentCount"], 2);
}
