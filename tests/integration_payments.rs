mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_student, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_payment(pool: &PgPool, student_id: i64, amount: &str, year: &str) {
    sqlx::query(
        "INSERT INTO payments (student_id, amount, payment_date, payment_mode, payment_type, academic_year) \
         VALUES ($1, $2::DECIMAL, '2026-01-10', 'CASH', 'TUITION', $3)",
    )
    .bind(student_id)
    .bind(amount)
    .bind(year)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_payment(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/payments")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "studentId": student_id,
                "amount": "50000.00",
                "paymentDate": "2026-01-10",
                "paymentMode": "MOBILE_MONEY",
                "paymentType": "TUITION",
                "academicYear": "2025-2026",
                "receiptNumber": "REC-001"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["amount"], "50000.00");
    assert_eq!(body["paymentMode"], "MOBILE_MONEY");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_payment_for_unknown_student_is_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/payments")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "studentId": 999999,
                "amount": "1000.00",
                "paymentDate": "2026-01-10",
                "paymentMode": "CASH",
                "paymentType": "TUITION",
                "academicYear": "2025-2026"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_total_paid_sums_all_years(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;
    insert_payment(&pool, student_id, "30000.00", "2024-2025").await;
    insert_payment(&pool, student_id, "45000.00", "2025-2026").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/payments/student/{student_id}/total"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["total"], "75000.00");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_total_paid_filtered_by_academic_year(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;
    insert_payment(&pool, student_id, "30000.00", "2024-2025").await;
    insert_payment(&pool, student_id, "45000.00", "2025-2026").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!(
            "/api/payments/student/{student_id}/total?academicYear=2025-2026"
        ))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["total"], "45000.00");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_total_paid_is_zero_without_payments(pool: PgPool) {
    let student_id = create_test_student(&pool, None).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/payments/student/{student_id}/total"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["total"], "0");
}
