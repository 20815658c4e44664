use sqlx::PgPool;
use tracing::instrument;

use crate::modules::statistics::model::{ClassesBySection, SchoolStatistics};
use crate::utils::errors::AppError;

pub struct StatisticsService;

impl StatisticsService {
    #[instrument(skip(db))]
    pub async fn get_school_statistics(db: &PgPool) -> Result<SchoolStatistics, AppError> {
        let row: (i64, i64, i64, i64, i64, i64, i64) = sqlx::query_as(
            "SELECT \
             (SELECT COUNT(*) FROM classes), \
             (SELECT COUNT(*) FROM students), \
             (SELECT COUNT(*) FROM teachers), \
             (SELECT COUNT(*) FROM subjects), \
             (SELECT COUNT(*) FROM classes WHERE section = 'CRECHE'), \
             (SELECT COUNT(*) FROM classes WHERE section = 'MATERNELLE'), \
             (SELECT COUNT(*) FROM classes WHERE section = 'PRIMAIRE')",
        )
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        let (total_classes, total_students, total_teachers, total_subjects, creche, maternelle, primaire) =
            row;

        Ok(SchoolStatistics {
            total_classes,
            total_students,
            total_teachers,
            total_subjects,
            classes_by_section: ClassesBySection {
                creche,
                maternelle,
                primaire,
            },
        })
    }
}
