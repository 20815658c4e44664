use sqlx::PgPool;
use tracing::instrument;

use crate::modules::classes::model::{Class, ClassStatistics, CreateClassDto, UpdateClassDto};
use crate::modules::enums::{Language, Section};
use crate::utils::errors::AppError;

const CLASS_COLUMNS: &str =
    "id, name, level, section, language, academic_year, max_capacity, teacher_id";

pub struct ClassService;

impl ClassService {
    /// Creates a class. The (name, level, section, language) tuple must be
    /// unique; any single differing field makes a distinct class.
    #[instrument(skip(db, dto))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM classes \
             WHERE name = $1 AND level = $2 AND section = $3 AND language = $4)",
        )
        .bind(&dto.name)
        .bind(&dto.level)
        .bind(dto.section)
        .bind(dto.language)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if duplicate {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A class with this name, level, section and language already exists"
            )));
        }

        if let Some(teacher_id) = dto.teacher_id {
            Self::ensure_teacher_exists(db, teacher_id).await?;
        }

        sqlx::query_as::<_, Class>(&format!(
            "INSERT INTO classes (name, level, section, language, academic_year, max_capacity, \
             teacher_id) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.level)
        .bind(dto.section)
        .bind(dto.language)
        .bind(&dto.academic_year)
        .bind(dto.max_capacity)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_class(db: &PgPool, id: i64) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!("SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_section(
        db: &PgPool,
        section: Section,
    ) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE section = $1 ORDER BY name"
        ))
        .bind(section)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_language(
        db: &PgPool,
        language: Language,
    ) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE language = $1 ORDER BY name"
        ))
        .bind(language)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_section_and_language(
        db: &PgPool,
        section: Section,
        language: Language,
    ) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE section = $1 AND language = $2 \
             ORDER BY name"
        ))
        .bind(section)
        .bind(language)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_academic_year(
        db: &PgPool,
        academic_year: &str,
    ) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE academic_year = $1 ORDER BY name"
        ))
        .bind(academic_year)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_teacher(db: &PgPool, teacher_id: i64) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE teacher_id = $1 ORDER BY name"
        ))
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_class_statistics(db: &PgPool, id: i64) -> Result<ClassStatistics, AppError> {
        let class = Self::get_class(db, id).await?;
        let student_count = Self::count_students(db, id).await?;

        Ok(ClassStatistics {
            class_id: class.id,
            student_count,
            max_capacity: class.max_capacity,
        })
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(db: &PgPool, id: i64, dto: UpdateClassDto) -> Result<Class, AppError> {
        let existing = Self::get_class(db, id).await?;

        sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET name = $1, level = $2, section = $3, language = $4, \
             academic_year = $5, max_capacity = $6 WHERE id = $7 RETURNING {CLASS_COLUMNS}"
        ))
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.level.unwrap_or(existing.level))
        .bind(dto.section.unwrap_or(existing.section))
        .bind(dto.language.unwrap_or(existing.language))
        .bind(dto.academic_year.unwrap_or(existing.academic_year))
        .bind(dto.max_capacity.or(existing.max_capacity))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn assign_teacher(
        db: &PgPool,
        class_id: i64,
        teacher_id: i64,
    ) -> Result<Class, AppError> {
        Self::get_class(db, class_id).await?;
        Self::ensure_teacher_exists(db, teacher_id).await?;

        sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET teacher_id = $1 WHERE id = $2 RETURNING {CLASS_COLUMNS}"
        ))
        .bind(teacher_id)
        .bind(class_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Deleting a class is refused while students are still enrolled.
    #[instrument(skip(db))]
    pub async fn delete_class(db: &PgPool, id: i64) -> Result<(), AppError> {
        Self::get_class(db, id).await?;

        let student_count = Self::count_students(db, id).await?;
        if student_count > 0 {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Cannot delete a class that still has students"
            )));
        }

        sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(())
    }

    async fn count_students(db: &PgPool, class_id: i64) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE class_id = $1")
            .bind(class_id)
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))
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
