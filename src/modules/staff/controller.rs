use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::enums::UserRole;
use crate::modules::staff::model::{CreateStaffDto, SearchParams, Staff, UpdateStaffDto};
use crate::modules::staff::service::StaffService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::{Paginated, PaginationMeta, PaginationParams};

#[utoipa::path(
    post,
    path = "/api/staff",
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff member created", body = Staff),
        (status = 409, description = "Duplicate email", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn create_staff(
    State(state): State<AppState>,
    Json(dto): Json<CreateStaffDto>,
) -> Result<(StatusCode, Json<Staff>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let staff = StaffService::create_staff(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

#[utoipa::path(
    get,
    path = "/api/staff",
    responses((status = 200, description = "All staff members", body = [Staff])),
    tag = "Staff"
)]
pub async fn get_staff_members(State(state): State<AppState>) -> Result<Json<Vec<Staff>>, AppError> {
    let staff = StaffService::list_staff(&state.db).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/staff/paginated",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, capped at 100")
    ),
    responses((status = 200, description = "One page of staff members", body = Paginated<Staff>)),
    tag = "Staff"
)]
pub async fn get_staff_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Staff>>, AppError> {
    let (staff, total) =
        StaffService::list_staff_paginated(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(Paginated {
        data: staff,
        meta: PaginationMeta::new(&params, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    params(("id" = i64, Path, description = "Staff id")),
    responses(
        (status = 200, description = "Staff member details", body = Staff),
        (status = 404, description = "Staff member not found", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn get_staff_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Staff>, AppError> {
    let staff = StaffService::get_staff(&state.db, id).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/staff/department/{department}",
    params(("department" = String, Path, description = "Exact department")),
    responses((status = 200, description = "Staff in the department", body = [Staff])),
    tag = "Staff"
)]
pub async fn get_staff_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<Vec<Staff>>, AppError> {
    let staff = StaffService::get_staff_by_department(&state.db, &department).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/staff/position/{position}",
    params(("position" = String, Path, description = "Exact position")),
    responses((status = 200, description = "Staff holding the position", body = [Staff])),
    tag = "Staff"
)]
pub async fn get_staff_by_position(
    State(state): State<AppState>,
    Path(position): Path<String>,
) -> Result<Json<Vec<Staff>>, AppError> {
    let staff = StaffService::get_staff_by_position(&state.db, &position).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/staff/role/{role}",
    params(("role" = UserRole, Path, description = "Staff role")),
    responses((status = 200, description = "Staff with the role", body = [Staff])),
    tag = "Staff"
)]
pub async fn get_staff_by_role(
    State(state): State<AppState>,
    Path(role): Path<UserRole>,
) -> Result<Json<Vec<Staff>>, AppError> {
    let staff = StaffService::get_staff_by_role(&state.db, role).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/staff/email/{email}",
    params(("email" = String, Path, description = "Email address")),
    responses(
        (status = 200, description = "Staff member with the email", body = Staff),
        (status = 404, description = "No staff member with this email", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn get_staff_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Staff>, AppError> {
    let staff = StaffService::get_staff_by_email(&state.db, &email).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/staff/search",
    params(("q" = String, Query, description = "Name substring, case-insensitive")),
    responses((status = 200, description = "Matching staff members", body = [Staff])),
    tag = "Staff"
)]
pub async fn search_staff(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Staff>>, AppError> {
    let staff = StaffService::search_staff(&state.db, &params.q).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    params(("id" = i64, Path, description = "Staff id")),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Staff member updated", body = Staff),
        (status = 404, description = "Staff member not found", body = ErrorResponse),
        (status = 409, description = "Duplicate email", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateStaffDto>,
) -> Result<Json<Staff>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let staff = StaffService::update_staff(&state.db, id, dto).await?;
    Ok(Json(staff))
}

#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    params(("id" = i64, Path, description = "Staff id")),
    responses(
        (status = 204, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    StaffService::delete_staff(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
