use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::notifications::model::{CreateNotificationDto, Notification};
use crate::modules::notifications::service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(dto): Json<CreateNotificationDto>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let notification = NotificationService::create_notification(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

#[utoipa::path(
    get,
    path = "/api/notifications/user/{userId}",
    params(("userId" = i64, Path, description = "User id")),
    responses((status = 200, description = "Notifications for the user", body = [Notification])),
    tag = "Notifications"
)]
pub async fn get_notifications_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = NotificationService::get_notifications_by_user(&state.db, user_id).await?;
    Ok(Json(notifications))
}

#[utoipa::path(
    get,
    path = "/api/notifications/user/{userId}/unread",
    params(("userId" = i64, Path, description = "User id")),
    responses((status = 200, description = "Unread notifications for the user", body = [Notification])),
    tag = "Notifications"
)]
pub async fn get_unread_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = NotificationService::get_unread_by_user(&state.db, user_id).await?;
    Ok(Json(notifications))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification marked read", body = Notification),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Notification>, AppError> {
    let notification = NotificationService::mark_as_read(&state.db, id).await?;
    Ok(Json(notification))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    NotificationService::delete_notification(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
