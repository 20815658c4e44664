use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::enums::Section;
use crate::modules::subjects::model::{
    CreateSubjectDto, SearchParams, Subject, UpdateSubjectDto,
};
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 409, description = "Duplicate name/section or code", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(dto): Json<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let subject = SubjectService::create_subject(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    responses((status = 200, description = "All subjects", body = [Subject])),
    tag = "Subjects"
)]
pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::list_subjects(&state.db).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject id")),
    responses(
        (status = 200, description = "Subject details", body = Subject),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::get_subject(&state.db, id).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    get,
    path = "/api/subjects/teacher/{teacherId}",
    params(("teacherId" = i64, Path, description = "Teacher id")),
    responses((status = 200, description = "Subjects taught by the teacher", body = [Subject])),
    tag = "Subjects"
)]
pub async fn get_subjects_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::get_subjects_by_teacher(&state.db, teacher_id).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/section/{section}",
    params(("section" = Section, Path, description = "School section")),
    responses((status = 200, description = "Subjects in the section", body = [Subject])),
    tag = "Subjects"
)]
pub async fn get_subjects_by_section(
    State(state): State<AppState>,
    Path(section): Path<Section>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::get_subjects_by_section(&state.db, section).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/search",
    params(("q" = String, Query, description = "Name substring, case-insensitive")),
    responses((status = 200, description = "Matching subjects", body = [Subject])),
    tag = "Subjects"
)]
pub async fn search_subjects(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::search_subjects(&state.db, &params.q).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject id")),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = Subject),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateSubjectDto>,
) -> Result<Json<Subject>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let subject = SubjectService::update_subject(&state.db, id, dto).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    post,
    path = "/api/subjects/{subjectId}/teacher/{teacherId}",
    params(
        ("subjectId" = i64, Path, description = "Subject id"),
        ("teacherId" = i64, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Primary teacher assigned", body = Subject),
        (status = 404, description = "Subject or teacher not found", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
pub async fn assign_subject_teacher(
    State(state): State<AppState>,
    Path((subject_id, teacher_id)): Path<(i64, i64)>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::assign_teacher(&state.db, subject_id, teacher_id).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{subjectId}/teacher",
    params(("subjectId" = i64, Path, description = "Subject id")),
    responses(
        (status = 200, description = "Primary teacher cleared", body = Subject),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
pub async fn remove_subject_teacher(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::remove_teacher(&state.db, subject_id).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject id")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    SubjectService::delete_subject(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
