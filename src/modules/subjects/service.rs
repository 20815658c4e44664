use sqlx::PgPool;
use tracing::instrument;

use crate::modules::enums::Section;
use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use crate::utils::errors::AppError;

const SUBJECT_COLUMNS: &str =
    "id, name, code, description, section, language, level, credits, coefficient, teacher_id";

pub struct SubjectService;

impl SubjectService {
    /// Creates a subject. `(name, section)` must be unique; the code column
    /// additionally carries its own unique constraint.
    #[instrument(skip(db, dto))]
    pub async fn create_subject(db: &PgPool, dto: CreateSubjectDto) -> Result<Subject, AppError> {
        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM subjects \
             WHERE name = $1 AND section IS NOT DISTINCT FROM $2)",
        )
        .bind(&dto.name)
        .bind(dto.section)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if duplicate {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A subject with this name already exists in this section"
            )));
        }

        if let Some(teacher_id) = dto.teacher_id {
            Self::ensure_teacher_exists(db, teacher_id).await?;
        }

        sqlx::query_as::<_, Subject>(&format!(
            "INSERT INTO subjects (name, code, description, section, language, level, credits, \
             coefficient, teacher_id) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SUBJECT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(&dto.description)
        .bind(dto.section)
        .bind(dto.language)
        .bind(&dto.level)
        .bind(dto.credits.unwrap_or(1))
        .bind(dto.coefficient.unwrap_or(1))
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A subject with this code already exists"))
    }

    #[instrument(skip(db))]
    pub async fn get_subject(db: &PgPool, id: i64) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_subjects(db: &PgPool) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Subjects the teacher is involved with, either as the primary teacher
    /// or through the `subject_teachers` join table.
    #[instrument(skip(db))]
    pub async fn get_subjects_by_teacher(
        db: &PgPool,
        teacher_id: i64,
    ) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(&format!(
            "SELECT DISTINCT s.id, s.name, s.code, s.description, s.section, s.language, \
             s.level, s.credits, s.coefficient, s.teacher_id FROM subjects s \
             LEFT JOIN subject_teachers st ON st.subject_id = s.id \
             WHERE s.teacher_id = $1 OR st.teacher_id = $1 ORDER BY s.name"
        ))
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_subjects_by_section(
        db: &PgPool,
        section: Section,
    ) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects WHERE section = $1 ORDER BY name"
        ))
        .bind(section)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn search_subjects(db: &PgPool, query: &str) -> Result<Vec<Subject>, AppError> {
        let pattern = format!("%{}%", query);
        sqlx::query_as::<_, Subject>(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects WHERE name ILIKE $1 ORDER BY name"
        ))
        .bind(pattern)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_subject(
        db: &PgPool,
        id: i64,
        dto: UpdateSubjectDto,
    ) -> Result<Subject, AppError> {
        let existing = Self::get_subject(db, id).await?;

        sqlx::query_as::<_, Subject>(&format!(
            "UPDATE subjects SET name = $1, code = $2, description = $3, section = $4, \
             language = $5, level = $6, credits = $7, coefficient = $8 WHERE id = $9 \
             RETURNING {SUBJECT_COLUMNS}"
        ))
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.code.or(existing.code))
        .bind(dto.description.or(existing.description))
        .bind(dto.section.or(existing.section))
        .bind(dto.language.or(existing.language))
        .bind(dto.level.or(existing.level))
        .bind(dto.credits.unwrap_or(existing.credits))
        .bind(dto.coefficient.unwrap_or(existing.coefficient))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "A subject with this code already exists"))
    }

    #[instrument(skip(db))]
    pub async fn assign_teacher(
        db: &PgPool,
        subject_id: i64,
        teacher_id: i64,
    ) -> Result<Subject, AppError> {
        Self::get_subject(db, subject_id).await?;
        Self::ensure_teacher_exists(db, teacher_id).await?;

        sqlx::query_as::<_, Subject>(&format!(
            "UPDATE subjects SET teacher_id = $1 WHERE id = $2 RETURNING {SUBJECT_COLUMNS}"
        ))
        .bind(teacher_id)
        .bind(subject_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn remove_teacher(db: &PgPool, subject_id: i64) -> Result<Subject, AppError> {
        Self::get_subject(db, subject_id).await?;

        sqlx::query_as::<_, Subject>(&format!(
            "UPDATE subjects SET teacher_id = NULL WHERE id = $1 RETURNING {SUBJECT_COLUMNS}"
        ))
        .bind(subject_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn delete_subject(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Subject not found")));
        }
        Ok(())
    }

    async fn ensure_teacher_exists(db: &PgPool, teacher_id: i64) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teachers WHERE id = $1)")
                .bind(teacher_id)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }
        Ok(())
    }
}
