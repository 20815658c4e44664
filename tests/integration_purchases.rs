mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::setup_test_app;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_total_amount_always_recomputed(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    // a client-supplied totalAmount is ignored
    let request = Request::builder()
        .method("POST")
        .uri("/api/purchases")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "itemName": "Cahiers 96 pages",
                "quantity": 3,
                "unitPrice": "12.50",
                "totalAmount": "1.00",
                "purchaseDate": "2026-01-10",
                "supplier": "Librairie Centrale",
                "category": "FOURNITURES"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["totalAmount"], "37.50");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_recomputes_total(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/purchases")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "itemName": "Craies",
                "quantity": 10,
                "unitPrice": "2.00",
                "purchaseDate": "2026-01-10"
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let id = body["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/purchases/{id}"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "quantity": 4 })).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["totalAmount"], "8.00");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_future_purchase_date_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/purchases")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "itemName": "Tables",
                "quantity": 5,
                "unitPrice": "45.00",
                "purchaseDate": "2099-01-01"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_inverted_date_range_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/purchases/date-range?startDate=2026-02-01&endDate=2026-01-01")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_invoice_number_conflicts(pool: PgPool) {
    let payload = json!({
        "itemName": "Bancs",
        "quantity": 2,
        "unitPrice": "30.00",
        "purchaseDate": "2026-01-10",
        "invoiceNumber": "INV-2026-001"
    });

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/purchases")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/purchases")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_spend_summary_by_category(pool: PgPool) {
    for (item, category, qty, price) in [
        ("Cahiers", "FOURNITURES", 10, "1.50"),
        ("Stylos", "FOURNITURES", 20, "0.25"),
        ("Balais", "ENTRETIEN", 4, "3.00"),
    ] {
        sqlx::query(
            "INSERT INTO purchases (item_name, quantity, unit_price, total_amount, purchase_date, category) \
             VALUES ($1, $2, $3::DECIMAL, $2 * $3::DECIMAL, '2026-01-10', $4)",
        )
        .bind(item)
        .bind(qty)
        .bind(price)
        .bind(category)
        .execute(&pool)
        .await
        .unwrap();
    }

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/purchases/summary/category")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let fournitures = rows
        .iter()
        .find(|r| r["group"] == "FOURNITURES")
        .unwrap();
    assert_eq!(fournitures["total"], "20.00");
}
