mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{generate_unique_serial, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_equipment(pool: &PgPool, name: &str, maintenance: &str, warranty: &str) -> i64 {
    sqlx::query_scalar(&format!(
        "INSERT INTO equipment (name, serial_number, status, maintenance_date, warranty_expiry_date) \
         VALUES ($1, $2, 'IN_SERVICE', CURRENT_DATE + {maintenance}, CURRENT_DATE + {warranty}) \
         RETURNING id"
    ))
    .bind(name)
    .bind(generate_unique_serial())
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_equipment(pool: PgPool) {
    let serial = generate_unique_serial();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/equipment")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Photocopieuse",
                "serialNumber": serial,
                "status": "IN_SERVICE",
                "category": "BUREAU",
                "location": "Secrétariat"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["serialNumber"], serial.as_str());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_serial_number_conflicts(pool: PgPool) {
    let serial = generate_unique_serial();
    let payload = json!({
        "name": "Projecteur",
        "serialNumber": serial,
        "status": "IN_SERVICE"
    });

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/equipment")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/equipment")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("serial number"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_maintenance_due_is_strictly_past(pool: PgPool) {
    let overdue = insert_equipment(&pool, "Climatiseur", "-1", "365").await;
    // due today and due tomorrow are not overdue
    insert_equipment(&pool, "Imprimante", "0", "365").await;
    insert_equipment(&pool, "Scanner", "1", "365").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/equipment/maintenance-due")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64().unwrap(), overdue);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_under_warranty_excludes_expiring_today(pool: PgPool) {
    let covered = insert_equipment(&pool, "Ordinateur", "30", "1").await;
    insert_equipment(&pool, "Tableau interactif", "30", "0").await;
    insert_equipment(&pool, "Routeur", "30", "-1").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/equipment/under-warranty")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64().unwrap(), covered);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_equipment_by_serial(pool: PgPool) {
    let id = insert_equipment(&pool, "Groupe électrogène", "30", "365").await;
    let serial: String = sqlx::query_scalar("SELECT serial_number FROM equipment WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/equipment/serial/{serial}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), id);
}
