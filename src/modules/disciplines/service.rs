use chrono::{Days, Utc};
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::disciplines::model::{
    CreateDisciplineDto, Discipline, DisciplineStatistics, UpdateDisciplineDto,
};
use crate::modules::enums::DisciplineType;
use crate::utils::errors::AppError;

const DISCIPLINE_COLUMNS: &str = "id, student_id, type, incident_date, description, action, \
     resolved, created_at, reported_by";

pub struct DisciplineService;

impl DisciplineService {
    #[instrument(skip(db, dto))]
    pub async fn create_discipline(
        db: &PgPool,
        dto: CreateDisciplineDto,
    ) -> Result<Discipline, AppError> {
        Self::ensure_student_exists(db, dto.student_id).await?;

        sqlx::query_as::<_, Discipline>(&format!(
            "INSERT INTO disciplines (student_id, type, incident_date, description, action, \
             reported_by) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {DISCIPLINE_COLUMNS}"
        ))
        .bind(dto.student_id)
        .bind(dto.discipline_type)
        .bind(dto.incident_date)
        .bind(&dto.description)
        .bind(&dto.action)
        .bind(&dto.reported_by)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_discipline(db: &PgPool, id: i64) -> Result<Discipline, AppError> {
        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Discipline record not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_disciplines(db: &PgPool) -> Result<Vec<Discipline>, AppError> {
        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines ORDER BY incident_date DESC, id DESC"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn list_disciplines_paginated(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Discipline>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM disciplines")
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let disciplines = sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines \
             ORDER BY incident_date DESC, id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok((disciplines, total))
    }

    #[instrument(skip(db))]
    pub async fn get_disciplines_by_student(
        db: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Discipline>, AppError> {
        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines WHERE student_id = $1 \
             ORDER BY incident_date DESC, id DESC"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_unresolved_by_student(
        db: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Discipline>, AppError> {
        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines \
             WHERE student_id = $1 AND resolved = FALSE ORDER BY incident_date DESC, id DESC"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn count_by_student(db: &PgPool, student_id: i64) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM disciplines WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_disciplines_by_type(
        db: &PgPool,
        discipline_type: DisciplineType,
    ) -> Result<Vec<Discipline>, AppError> {
        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines WHERE type = $1 \
             ORDER BY incident_date DESC, id DESC"
        ))
        .bind(discipline_type)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_disciplines_by_resolved(
        db: &PgPool,
        resolved: bool,
    ) -> Result<Vec<Discipline>, AppError> {
        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines WHERE resolved = $1 \
             ORDER BY incident_date DESC, id DESC"
        ))
        .bind(resolved)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_disciplines_by_date_range(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Discipline>, AppError> {
        Self::check_date_range(start, end)?;

        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines \
             WHERE incident_date BETWEEN $1 AND $2 ORDER BY incident_date DESC, id DESC"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_disciplines_by_date_range_paginated(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Discipline>, i64), AppError> {
        Self::check_date_range(start, end)?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM disciplines WHERE incident_date BETWEEN $1 AND $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let disciplines = sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines \
             WHERE incident_date BETWEEN $1 AND $2 \
             ORDER BY incident_date DESC, id DESC LIMIT $3 OFFSET $4"
        ))
        .bind(start)
        .bind(end)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok((disciplines, total))
    }

    /// Incidents from the last `days` days, today included.
    #[instrument(skip(db))]
    pub async fn get_recent_disciplines(
        db: &PgPool,
        days: i64,
    ) -> Result<Vec<Discipline>, AppError> {
        if days < 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Days must not be negative"
            )));
        }

        let cutoff = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(days as u64))
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Days out of range")))?;

        sqlx::query_as::<_, Discipline>(&format!(
            "SELECT {DISCIPLINE_COLUMNS} FROM disciplines WHERE incident_date >= $1 \
             ORDER BY incident_date DESC, id DESC"
        ))
        .bind(cutoff)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_pending_actions(db: &PgPool) -> Result<Vec<Discipline>, AppError> {
        Self::get_disciplines_by_resolved(db, false).await
    }

    #[instrument(skip(db))]
    pub async fn get_statistics(db: &PgPool) -> Result<DisciplineStatistics, AppError> {
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
             COUNT(*) FILTER (WHERE resolved), \
             COUNT(*) FILTER (WHERE type = 'BLAME'), \
             COUNT(*) FILTER (WHERE type = 'CONVOCATION') \
             FROM disciplines",
        )
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let (total, resolved, blame_count, convocation_count) = row;
        Ok(DisciplineStatistics {
            total,
            resolved,
            unresolved: total - resolved,
            blame_count,
            convocation_count,
        })
    }

    /// Marks an incident resolved, optionally recording the action taken.
    #[instrument(skip(db))]
    pub async fn resolve_discipline(
        db: &PgPool,
        id: i64,
        action: Option<String>,
    ) -> Result<Discipline, AppError> {
        Self::get_discipline(db, id).await?;

        sqlx::query_as::<_, Discipline>(&format!(
            "UPDATE disciplines SET resolved = TRUE, action = COALESCE($1, action) \
             WHERE id = $2 RETURNING {DISCIPLINE_COLUMNS}"
        ))
        .bind(action)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_discipline(
        db: &PgPool,
        id: i64,
        dto: UpdateDisciplineDto,
    ) -> Result<Discipline, AppError> {
        let existing = Self::get_discipline(db, id).await?;

        sqlx::query_as::<_, Discipline>(&format!(
            "UPDATE disciplines SET type = $1, incident_date = $2, description = $3, \
             action = $4, resolved = $5, reported_by = $6 WHERE id = $7 \
             RETURNING {DISCIPLINE_COLUMNS}"
        ))
        .bind(dto.discipline_type.unwrap_or(existing.discipline_type))
        .bind(dto.incident_date.unwrap_or(existing.incident_date))
        .bind(dto.description.unwrap_or(existing.description))
        .bind(dto.action.or(existing.action))
        .bind(dto.resolved.unwrap_or(existing.resolved))
        .bind(dto.reported_by.or(existing.reported_by))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn delete_discipline(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM disciplines WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Discipline record not found"
            )));
        }
        Ok(())
    }

    fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
        if start > end {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Start date must not be after end date"
            )));
        }
        Ok(())
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
}
