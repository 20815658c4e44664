use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use scolaris::config::cors::CorsConfig;
use scolaris::middleware::policy::AllowAll;
use scolaris::router::init_router;
use scolaris::state::AppState;
use scolaris::utils::storage::LocalFileStore;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let upload_dir = std::env::temp_dir().join(format!("scolaris-test-{}", Uuid::new_v4()));
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
        file_store: Arc::new(LocalFileStore::new(upload_dir)),
        access_policy: Arc::new(AllowAll),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_serial() -> String {
    format!("SN-{}", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn create_test_class(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO classes (name, level, section, language, academic_year, max_capacity) \
         VALUES ($1, 'CP', 'PRIMAIRE', 'FRANCOPHONE', '2025-2026', 30) RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_student(pool: &PgPool, class_id: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO students \
         (first_name, last_name, date_of_birth, gender, section, language, academic_year, parent_name, class_id) \
         VALUES ('Amina', 'Ndiaye', '2017-03-12', 'FEMALE', 'PRIMAIRE', 'FRANCOPHONE', '2025-2026', 'Mme Ndiaye', $1) \
         RETURNING id",
    )
    .bind(class_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_teacher(pool: &PgPool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO teachers (first_name, last_name, email) VALUES ('Paul', 'Biya', $1) RETURNING id",
    )
    .bind(generate_unique_email())
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_subject(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO subjects (name, section, credits, coefficient) \
         VALUES ($1, 'PRIMAIRE', 1, 1) RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, password, role, first_name, last_name, email) \
         VALUES ($1, 'not-a-real-hash', 'ADMIN_STAFF', 'Claire', 'Atangana', $2) RETURNING id",
    )
    .bind(generate_unique_username())
    .bind(generate_unique_email())
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_grade(pool: &PgPool, student_id: i64, subject_id: i64, value: &str) {
    sqlx::query(
        "INSERT INTO grades (student_id, subject_id, value, semester, academic_year) \
         VALUES ($1, $2, $3::DECIMAL, 'S1', '2025-2026')",
    )
    .bind(student_id)
    .bind(subject_id)
    .bind(value)
    .execute(pool)
    .await
    .unwrap();
}
