use sqlx::PgPool;
use tracing::instrument;

use crate::modules::enums::{Language, Section};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::utils::errors::AppError;

const STUDENT_COLUMNS: &str = "id, first_name, last_name, date_of_birth, gender, section, \
     language, academic_year, parent_name, parent_phone, parent_email, address, class_id, \
     registration_date";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        if let Some(class_id) = dto.class_id {
            Self::ensure_class_exists(db, class_id).await?;
        }

        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (first_name, last_name, date_of_birth, gender, section, \
             language, academic_year, parent_name, parent_phone, parent_email, address, class_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.date_of_birth)
        .bind(dto.gender)
        .bind(dto.section)
        .bind(dto.language)
        .bind(&dto.academic_year)
        .bind(&dto.parent_name)
        .bind(&dto.parent_phone)
        .bind(&dto.parent_email)
        .bind(&dto.address)
        .bind(dto.class_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, id: i64) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY last_name, first_name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn list_students_paginated(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Student>, i64), AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY last_name, first_name \
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok((students, total))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let existing = Self::get_student(db, id).await?;

        if let Some(class_id) = dto.class_id {
            Self::ensure_class_exists(db, class_id).await?;
        }

        let student = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET first_name = $1, last_name = $2, date_of_birth = $3, \
             gender = $4, section = $5, language = $6, academic_year = $7, parent_name = $8, \
             parent_phone = $9, parent_email = $10, address = $11, class_id = $12 \
             WHERE id = $13 RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(dto.first_name.unwrap_or(existing.first_name))
        .bind(dto.last_name.unwrap_or(existing.last_name))
        .bind(dto.date_of_birth.unwrap_or(existing.date_of_birth))
        .bind(dto.gender.unwrap_or(existing.gender))
        .bind(dto.section.unwrap_or(existing.section))
        .bind(dto.language.unwrap_or(existing.language))
        .bind(dto.academic_year.unwrap_or(existing.academic_year))
        .bind(dto.parent_name.unwrap_or(existing.parent_name))
        .bind(dto.parent_phone.or(existing.parent_phone))
        .bind(dto.parent_email.or(existing.parent_email))
        .bind(dto.address.or(existing.address))
        .bind(dto.class_id.or(existing.class_id))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_students_by_class(db: &PgPool, class_id: i64) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE class_id = $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(class_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_students_by_section(
        db: &PgPool,
        section: Section,
    ) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE section = $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(section)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_students_by_language(
        db: &PgPool,
        language: Language,
    ) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE language = $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(language)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Case-insensitive substring search over first and last names.
    #[instrument(skip(db))]
    pub async fn search_students(db: &PgPool, query: &str) -> Result<Vec<Student>, AppError> {
        let pattern = format!("%{}%", query);
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students \
             WHERE first_name ILIKE $1 OR last_name ILIKE $1 \
             ORDER BY last_name, first_name"
        ))
        .bind(pattern)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    async fn ensure_class_exists(db: &PgPool, class_id: i64) -> Result<(), AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM classes WHERE id = $1)")
            .bind(class_id)
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }
        Ok(())
    }
}
