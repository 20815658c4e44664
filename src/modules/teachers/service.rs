use sqlx::PgPool;
use tracing::instrument;

use crate::modules::teachers::model::{CreateTeacherDto, Teacher, UpdateTeacherDto};
use crate::utils::errors::AppError;

const TEACHER_COLUMNS: &str = "id, first_name, last_name, email, phone, gender, birth_date, \
     hire_date, specialization, task_description, user_id";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db, dto))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (first_name, last_name, email, phone, gender, birth_date, \
             hire_date, specialization, task_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.gender)
        .bind(dto.birth_date)
        .bind(dto.hire_date)
        .bind(&dto.specialization)
        .bind(&dto.task_description)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A teacher with this email already exists"))
    }

    #[instrument(skip(db))]
    pub async fn get_teacher(db: &PgPool, id: i64) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_by_email(db: &PgPool, email: &str) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No teacher with this email")))
    }

    #[instrument(skip(db))]
    pub async fn list_teachers(db: &PgPool) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY last_name, first_name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_teachers_by_specialization(
        db: &PgPool,
        specialization: &str,
    ) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE specialization = $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(specialization)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn search_teachers(db: &PgPool, query: &str) -> Result<Vec<Teacher>, AppError> {
        let pattern = format!("%{}%", query);
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers \
             WHERE first_name ILIKE $1 OR last_name ILIKE $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(pattern)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_teacher(
        db: &PgPool,
        id: i64,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let existing = Self::get_teacher(db, id).await?;

        sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers SET first_name = $1, last_name = $2, email = $3, phone = $4, \
             gender = $5, birth_date = $6, hire_date = $7, specialization = $8, \
             task_description = $9 WHERE id = $10 RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(dto.first_name.unwrap_or(existing.first_name))
        .bind(dto.last_name.unwrap_or(existing.last_name))
        .bind(dto.email.or(existing.email))
        .bind(dto.phone.or(existing.phone))
        .bind(dto.gender.or(existing.gender))
        .bind(dto.birth_date.or(existing.birth_date))
        .bind(dto.hire_date.or(existing.hire_date))
        .bind(dto.specialization.or(existing.specialization))
        .bind(dto.task_description.or(existing.task_description))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A teacher with this email already exists"))
    }

    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }
        Ok(())
    }
}
