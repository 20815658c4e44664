use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::disciplines::model::{
    CreateDisciplineDto, DateRangeParams, Discipline, DisciplineCount, DisciplineStatistics,
    RecentParams, ResolveDisciplineDto, UpdateDisciplineDto,
};
use crate::modules::disciplines::service::DisciplineService;
use crate::modules::enums::DisciplineType;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::{Paginated, PaginationMeta, PaginationParams};

#[utoipa::path(
    post,
    path = "/api/disciplines",
    request_body = CreateDisciplineDto,
    responses(
        (status = 201, description = "Incident recorded", body = Discipline),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn create_discipline(
    State(state): State<AppState>,
    Json(dto): Json<CreateDisciplineDto>,
) -> Result<(StatusCode, Json<Discipline>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let discipline = DisciplineService::create_discipline(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(discipline)))
}

#[utoipa::path(
    get,
    path = "/api/disciplines",
    responses((status = 200, description = "All incidents", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_disciplines(
    State(state): State<AppState>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = DisciplineService::list_disciplines(&state.db).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/paginated",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, capped at 100")
    ),
    responses((status = 200, description = "One page of incidents", body = Paginated<Discipline>)),
    tag = "Disciplines"
)]
pub async fn get_disciplines_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Discipline>>, AppError> {
    let (disciplines, total) =
        DisciplineService::list_disciplines_paginated(&state.db, params.limit(), params.offset())
            .await?;

    Ok(Json(Paginated {
        data: disciplines,
        meta: PaginationMeta::new(&params, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/{id}",
    params(("id" = i64, Path, description = "Incident id")),
    responses(
        (status = 200, description = "Incident details", body = Discipline),
        (status = 404, description = "Incident not found", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn get_discipline(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Discipline>, AppError> {
    let discipline = DisciplineService::get_discipline(&state.db, id).await?;
    Ok(Json(discipline))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/student/{studentId}",
    params(("studentId" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Incidents involving the student", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_disciplines_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = DisciplineService::get_disciplines_by_student(&state.db, student_id).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/student/{studentId}/unresolved",
    params(("studentId" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Open incidents for the student", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_unresolved_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = DisciplineService::get_unresolved_by_student(&state.db, student_id).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/student/{studentId}/count",
    params(("studentId" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Number of incidents for the student", body = DisciplineCount)),
    tag = "Disciplines"
)]
pub async fn count_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<DisciplineCount>, AppError> {
    let count = DisciplineService::count_by_student(&state.db, student_id).await?;
    Ok(Json(DisciplineCount { student_id, count }))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/type/{type}",
    params(("type" = DisciplineType, Path, description = "Incident type")),
    responses((status = 200, description = "Incidents of the type", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_disciplines_by_type(
    State(state): State<AppState>,
    Path(discipline_type): Path<DisciplineType>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines =
        DisciplineService::get_disciplines_by_type(&state.db, discipline_type).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/resolved/{resolved}",
    params(("resolved" = bool, Path, description = "Resolution state")),
    responses((status = 200, description = "Incidents in the resolution state", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_disciplines_by_resolved(
    State(state): State<AppState>,
    Path(resolved): Path<bool>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = DisciplineService::get_disciplines_by_resolved(&state.db, resolved).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/date-range",
    params(
        ("startDate" = String, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = String, Query, description = "Inclusive end date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Incidents within the range", body = [Discipline]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn get_disciplines_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = DisciplineService::get_disciplines_by_date_range(
        &state.db,
        range.start_date,
        range.end_date,
    )
    .await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/date-range-paginated",
    params(
        ("startDate" = String, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = String, Query, description = "Inclusive end date (YYYY-MM-DD)"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, capped at 100")
    ),
    responses(
        (status = 200, description = "One page of incidents within the range", body = Paginated<Discipline>),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn get_disciplines_by_date_range_paginated(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Discipline>>, AppError> {
    let (disciplines, total) = DisciplineService::get_disciplines_by_date_range_paginated(
        &state.db,
        range.start_date,
        range.end_date,
        params.limit(),
        params.offset(),
    )
    .await?;

    Ok(Json(Paginated {
        data: disciplines,
        meta: PaginationMeta::new(&params, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/recent",
    params(("days" = Option<i64>, Query, description = "Look-back window in days, default 7")),
    responses((status = 200, description = "Incidents within the window", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_recent_disciplines(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines =
        DisciplineService::get_recent_disciplines(&state.db, params.days.unwrap_or(7)).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/pending-actions",
    responses((status = 200, description = "Incidents still awaiting action", body = [Discipline])),
    tag = "Disciplines"
)]
pub async fn get_pending_actions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = DisciplineService::get_pending_actions(&state.db).await?;
    Ok(Json(disciplines))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/statistics",
    responses((status = 200, description = "Incident counts", body = DisciplineStatistics)),
    tag = "Disciplines"
)]
pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<DisciplineStatistics>, AppError> {
    let statistics = DisciplineService::get_statistics(&state.db).await?;
    Ok(Json(statistics))
}

#[utoipa::path(
    post,
    path = "/api/disciplines/{id}/resolve",
    params(("id" = i64, Path, description = "Incident id")),
    request_body = ResolveDisciplineDto,
    responses(
        (status = 200, description = "Incident resolved", body = Discipline),
        (status = 404, description = "Incident not found", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn resolve_discipline(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ResolveDisciplineDto>,
) -> Result<Json<Discipline>, AppError> {
    let discipline = DisciplineService::resolve_discipline(&state.db, id, dto.action).await?;
    Ok(Json(discipline))
}

#[utoipa::path(
    put,
    path = "/api/disciplines/{id}",
    params(("id" = i64, Path, description = "Incident id")),
    request_body = UpdateDisciplineDto,
    responses(
        (status = 200, description = "Incident updated", body = Discipline),
        (status = 404, description = "Incident not found", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn update_discipline(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateDisciplineDto>,
) -> Result<Json<Discipline>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let discipline = DisciplineService::update_discipline(&state.db, id, dto).await?;
    Ok(Json(discipline))
}

#[utoipa::path(
    delete,
    path = "/api/disciplines/{id}",
    params(("id" = i64, Path, description = "Incident id")),
    responses(
        (status = 204, description = "Incident deleted"),
        (status = 404, description = "Incident not found", body = ErrorResponse)
    ),
    tag = "Disciplines"
)]
pub async fn delete_discipline(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    DisciplineService::delete_discipline(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
