mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_class, create_test_student, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/students")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "firstName": "Awa",
                "lastName": "Diallo",
                "dateOfBirth": "2018-06-01",
                "gender": "FEMALE",
                "section": "MATERNELLE",
                "language": "FRANCOPHONE",
                "academicYear": "2025-2026",
                "parentName": "M. Diallo",
                "parentPhone": "+237 690 000 000"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["firstName"], "Awa");
    assert_eq!(body["section"], "MATERNELLE");
    assert!(body["id"].as_i64().unwrap() > 0);
    // registration date defaults to today when not provided
    assert!(body["registrationDate"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_validation_failure(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/students")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "firstName": "",
                "lastName": "Diallo",
                "dateOfBirth": "2018-06-01",
                "gender": "FEMALE",
                "section": "MATERNELLE",
                "language": "FRANCOPHONE",
                "academicYear": "2025-2026",
                "parentName": "M. Diallo"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_student_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .uri("/api/students/999999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_keeps_omitted_fields(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/students/{student_id}"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "address": "Quartier Bastos" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["address"], "Quartier Bastos");
    // fields absent from the payload are untouched
    assert_eq!(body["firstName"], "Amina");
    assert_eq!(body["parentName"], "Mme Ndiaye");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_students_by_class(pool: PgPool) {
    let class_id = create_test_class(&pool, "CP A").await;
    let in_class = create_test_student(&pool, Some(class_id)).await;
    create_test_student(&pool, None).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/students/class/{class_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"].as_i64().unwrap(), in_class);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_student(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/students/{student_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/students/{student_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_section_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .uri("/api/students/section/LYCEE")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_students_paginated_meta(pool: PgPool) {
    for _ in 0..3 {
        create_test_student(&pool, None).await;
    }

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/students/paginated?page=1&limit=2")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["totalPages"], 2);
    assert_eq!(body["meta"]["page"], 1);
}
