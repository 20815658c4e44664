mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_subject, create_test_teacher, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn create_subject_request(name: &str, section: Option<&str>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/subjects")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": name,
                "section": section
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_name_in_section_conflicts(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_subject_request("Mathématiques", Some("PRIMAIRE")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_subject_request("Mathématiques", Some("PRIMAIRE")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // the same name in a different section is a distinct subject
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_subject_request("Mathématiques", Some("MATERNELLE")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_name_without_section_conflicts(pool: PgPool) {
    // NULL sections compare equal for the duplicate check
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_subject_request("Musique", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_subject_request("Musique", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_credits_and_coefficient_default_to_one(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(create_subject_request("Dessin", Some("PRIMAIRE")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["credits"], 1);
    assert_eq!(body["coefficient"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_and_clear_primary_teacher(pool: PgPool) {
    let subject_id = create_test_subject(&pool, "Anglais").await;
    let teacher_id = create_test_teacher(&pool).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/subjects/{subject_id}/teacher/{teacher_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["teacherId"].as_i64().unwrap(), teacher_id);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/subjects/{subject_id}/teacher"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["teacherId"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_by_teacher_includes_primary_and_additional(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool).await;

    let primary = create_test_subject(&pool, "Sciences").await;
    sqlx::query("UPDATE subjects SET teacher_id = $1 WHERE id = $2")
        .bind(teacher_id)
        .bind(primary)
        .execute(&pool)
        .await
        .unwrap();

    let additional = create_test_subject(&pool, "Informatique").await;
    sqlx::query("INSERT INTO subject_teachers (subject_id, teacher_id) VALUES ($1, $2)")
        .bind(additional)
        .bind(teacher_id)
        .execute(&pool)
        .await
        .unwrap();

    create_test_subject(&pool, "Histoire").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri(format!("/api/subjects/teacher/{teacher_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&primary));
    assert!(ids.contains(&additional));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_is_case_insensitive(pool: PgPool) {
    create_test_subject(&pool, "Géographie").await;
    create_test_subject(&pool, "Chimie").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .uri("/api/subjects/search?q=graph")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Géographie");
}
