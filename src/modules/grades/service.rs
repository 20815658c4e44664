use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::grades::model::{CreateGradeDto, Grade, UpdateGradeDto};
use crate::utils::errors::AppError;

const GRADE_COLUMNS: &str = "id, student_id, subject_id, value, semester, academic_year, \
     exam_type, grade_date, comments";

/// Arithmetic mean rounded to 2 decimals. Grade values are non-negative,
/// so away-from-zero midpoint rounding is exactly half-up. An empty slice
/// averages to zero rather than erroring.
fn mean_rounded(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().copied().sum();
    (sum / Decimal::from(values.len() as u64))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db, dto))]
    pub async fn create_grade(db: &PgPool, dto: CreateGradeDto) -> Result<Grade, AppError> {
        Self::ensure_student_exists(db, dto.student_id).await?;
        Self::ensure_subject_exists(db, dto.subject_id).await?;

        sqlx::query_as::<_, Grade>(&format!(
            "INSERT INTO grades (student_id, subject_id, value, semester, academic_year, \
             exam_type, grade_date, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, CURRENT_DATE), $8) \
             RETURNING {GRADE_COLUMNS}"
        ))
        .bind(dto.student_id)
        .bind(dto.subject_id)
        .bind(dto.value)
        .bind(&dto.semester)
        .bind(&dto.academic_year)
        .bind(&dto.exam_type)
        .bind(dto.grade_date)
        .bind(&dto.comments)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_grade(db: &PgPool, id: i64) -> Result<Grade, AppError> {
        sqlx::query_as::<_, Grade>(&format!("SELECT {GRADE_COLUMNS} FROM grades WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Grade not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_grades(db: &PgPool) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(&format!(
            "SELECT {GRADE_COLUMNS} FROM grades ORDER BY grade_date DESC, id DESC"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_grades_by_student(db: &PgPool, student_id: i64) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(&format!(
            "SELECT {GRADE_COLUMNS} FROM grades WHERE student_id = $1 \
             ORDER BY grade_date DESC, id DESC"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_grades_by_subject(db: &PgPool, subject_id: i64) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(&format!(
            "SELECT {GRADE_COLUMNS} FROM grades WHERE subject_id = $1 \
             ORDER BY grade_date DESC, id DESC"
        ))
        .bind(subject_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_grades_by_student_and_subject(
        db: &PgPool,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(&format!(
            "SELECT {GRADE_COLUMNS} FROM grades WHERE student_id = $1 AND subject_id = $2 \
             ORDER BY grade_date DESC, id DESC"
        ))
        .bind(student_id)
        .bind(subject_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_student_average(
        db: &PgPool,
        student_id: i64,
        semester: Option<&str>,
    ) -> Result<Decimal, AppError> {
        let values = Self::fetch_values(db, "student_id", student_id, semester).await?;
        Ok(mean_rounded(&values))
    }

    #[instrument(skip(db))]
    pub async fn get_subject_average(
        db: &PgPool,
        subject_id: i64,
        semester: Option<&str>,
    ) -> Result<Decimal, AppError> {
        let values = Self::fetch_values(db, "subject_id", subject_id, semester).await?;
        Ok(mean_rounded(&values))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_grade(db: &PgPool, id: i64, dto: UpdateGradeDto) -> Result<Grade, AppError> {
        let existing = Self::get_grade(db, id).await?;

        sqlx::query_as::<_, Grade>(&format!(
            "UPDATE grades SET value = $1, semester = $2, academic_year = $3, exam_type = $4, \
             grade_date = $5, comments = $6 WHERE id = $7 RETURNING {GRADE_COLUMNS}"
        ))
        .bind(dto.value.unwrap_or(existing.value))
        .bind(dto.semester.unwrap_or(existing.semester))
        .bind(dto.academic_year.unwrap_or(existing.academic_year))
        .bind(dto.exam_type.or(existing.exam_type))
        .bind(dto.grade_date.unwrap_or(existing.grade_date))
        .bind(dto.comments.or(existing.comments))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn delete_grade(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM grades WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Grade not found")));
        }
        Ok(())
    }

    async fn fetch_values(
        db: &PgPool,
        column: &str,
        id: i64,
        semester: Option<&str>,
    ) -> Result<Vec<Decimal>, AppError> {
        // `column` is one of two hard-coded identifiers, never user input.
        let query = match semester {
            Some(_) => format!(
                "SELECT value FROM grades WHERE {column} = $1 AND semester = $2"
            ),
            None => format!("SELECT value FROM grades WHERE {column} = $1"),
        };

        let mut q = sqlx::query_scalar::<_, Decimal>(&query).bind(id);
        if let Some(semester) = semester {
            q = q.bind(semester);
        }
        q.fetch_all(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    async fn ensure_student_exists(db: &PgPool, student_id: i64) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
                .bind(student_id)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }
        Ok(())
    }

    async fn ensure_subject_exists(db: &PgPool, subject_id: i64) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM subjects WHERE id = $1)")
                .bind(subject_id)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Subject not found")));
        }
        Ok(())
    }
}
