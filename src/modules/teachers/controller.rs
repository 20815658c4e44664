use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::classes::model::Class;
use crate::modules::classes::service::ClassService;
use crate::modules::subjects::model::Subject;
use crate::modules::subjects::service::SubjectService;
use crate::modules::teachers::model::{CreateTeacherDto, SearchParams, Teacher, UpdateTeacherDto};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(dto): Json<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let teacher = TeacherService::create_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses((status = 200, description = "All teachers", body = [Teacher])),
    tag = "Teachers"
)]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::list_teachers(&state.db).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher(&state.db, id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    get,
    path = "/api/teachers/email/{email}",
    params(("email" = String, Path, description = "Teacher email")),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn get_teacher_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher_by_email(&state.db, &email).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    get,
    path = "/api/teachers/specialization/{specialization}",
    params(("specialization" = String, Path, description = "Specialization")),
    responses((status = 200, description = "Teachers with the specialization", body = [Teacher])),
    tag = "Teachers"
)]
pub async fn get_teachers_by_specialization(
    State(state): State<AppState>,
    Path(specialization): Path<String>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers =
        TeacherService::get_teachers_by_specialization(&state.db, &specialization).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/search",
    params(SearchParams),
    responses((status = 200, description = "Matching teachers", body = [Teacher])),
    tag = "Teachers"
)]
pub async fn search_teachers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::search_teachers(&state.db, &params.q).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher id")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}/classes",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Classes the teacher leads", body = [Class]),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn get_teacher_classes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Class>>, AppError> {
    TeacherService::get_teacher(&state.db, id).await?;
    let classes = ClassService::get_classes_by_teacher(&state.db, id).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}/subjects",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Subjects taught, primary or additional", body = [Subject]),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn get_teacher_subjects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Subject>>, AppError> {
    TeacherService::get_teacher(&state.db, id).await?;
    let subjects = SubjectService::get_subjects_by_teacher(&state.db, id).await?;
    Ok(Json(subjects))
}
