use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::enums::UserRole;
use crate::modules::users::model::{
    ChangePasswordDto, CreateUserDto, LoginDto, LoginResponse, UpdateUserDto, User,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::{Paginated, PaginationMeta, PaginationParams};

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Duplicate username or email", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let user = UserService::create_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login outcome, success or failure", body = LoginResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<Json<LoginResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let response = UserService::authenticate(&state.db, dto).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, capped at 100")
    ),
    responses((status = 200, description = "One page of users", body = Paginated<User>)),
    tag = "Users"
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<User>>, AppError> {
    let (users, total) =
        UserService::list_users_paginated(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(Paginated {
        data: users,
        meta: PaginationMeta::new(&params, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users/role/{role}",
    params(("role" = UserRole, Path, description = "Account role")),
    responses((status = 200, description = "Users with the role", body = [User])),
    tag = "Users"
)]
pub async fn get_users_by_role(
    State(state): State<AppState>,
    Path(role): Path<UserRole>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users_by_role(&state.db, role).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/active",
    responses((status = 200, description = "Active users", body = [User])),
    tag = "Users"
)]
pub async fn get_active_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_active_users(&state.db).await?;
    Ok(Json(users))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Duplicate username or email", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let user = UserService::update_user(&state.db, id, dto).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    params(("id" = i64, Path, description = "User id")),
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Old password does not match", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<StatusCode, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    UserService::change_password(&state.db, id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/activate",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User activated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn activate_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = UserService::set_active(&state.db, id, true).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/deactivate",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deactivated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = UserService::set_active(&state.db, id, false).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    UserService::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
