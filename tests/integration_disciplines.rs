mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_student, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_discipline(
    pool: &PgPool,
    student_id: i64,
    kind: &str,
    resolved: bool,
    days_ago: i32,
) -> i64 {
    sqlx::query_scalar(&format!(
        "INSERT INTO disciplines (student_id, type, incident_date, description, resolved) \
         VALUES ($1, $2::discipline_type, CURRENT_DATE - {days_ago}, 'Incident en classe', $3) \
         RETURNING id"
    ))
    .bind(student_id)
    .bind(kind)
    .bind(resolved)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_discipline(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/disciplines")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "studentId": student_id,
                "type": "BLAME",
                "incidentDate": "2026-01-15",
                "description": "Bagarre dans la cour",
                "reportedBy": "M. Onana"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["type"], "BLAME");
    assert_eq!(body["resolved"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resolve_sets_flag_and_keeps_action(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;
    let id = insert_discipline(&pool, student_id, "CONVOCATION", false, 3).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/disciplines/{id}/resolve"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "action": "Entretien avec les parents" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["resolved"], true);
    assert_eq!(body["action"], "Entretien avec les parents");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_statistics_counts_by_type_and_resolution(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;
    insert_discipline(&pool, student_id, "BLAME", true, 10).await;
    insert_discipline(&pool, student_id, "BLAME", false, 5).await;
    insert_discipline(&pool, student_id, "CONVOCATION", false, 2).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/disciplines/statistics")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["total"], 3);
    assert_eq!(body["resolved"], 1);
    assert_eq!(body["unresolved"], 2);
    assert_eq!(body["blameCount"], 2);
    assert_eq!(body["convocationCount"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_recent_defaults_to_last_seven_days(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;
    let recent = insert_discipline(&pool, student_id, "BLAME", false, 3).await;
    insert_discipline(&pool, student_id, "BLAME", false, 30).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/disciplines/recent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64().unwrap(), recent);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unresolved_count_by_student(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;
    insert_discipline(&pool, student_id, "BLAME", false, 1).await;
    insert_discipline(&pool, student_id, "BLAME", true, 1).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/disciplines/student/{student_id}/unresolved"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}
