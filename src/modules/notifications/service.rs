use sqlx::PgPool;
use tracing::instrument;

use crate::modules::notifications::model::{CreateNotificationDto, Notification};
use crate::utils::errors::AppError;

const NOTIFICATION_COLUMNS: &str = "id, user_id, message, read, created_at";

pub struct NotificationService;

impl NotificationService {
    #[instrument(skip(db, dto))]
    pub async fn create_notification(
        db: &PgPool,
        dto: CreateNotificationDto,
    ) -> Result<Notification, AppError> {
        Self::ensure_user_exists(db, dto.user_id).await?;

        sqlx::query_as::<_, Notification>(&format!(
            "INSERT INTO notifications (user_id, message) VALUES ($1, $2) \
             RETURNING {NOTIFICATION_COLUMNS}"
        ))
        .bind(dto.user_id)
        .bind(&dto.message)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_notifications_by_user(
        db: &PgPool,
        user_id: i64,
    ) -> Result<Vec<Notification>, AppError> {
        sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_unread_by_user(
        db: &PgPool,
        user_id: i64,
    ) -> Result<Vec<Notification>, AppError> {
        sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications \
             WHERE user_id = $1 AND read = FALSE ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn mark_as_read(db: &PgPool, id: i64) -> Result<Notification, AppError> {
        sqlx::query_as::<_, Notification>(&format!(
            "UPDATE notifications SET read = TRUE WHERE id = $1 RETURNING {NOTIFICATION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Notification not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_notification(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Notification not found"
            )));
        }
        Ok(())
    }

    async fn ensure_user_exists(db: &PgPool, user_id: i64) -> Result<(), AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }
        Ok(())
    }
}
