use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::grades::model::{
    AverageParams, CreateGradeDto, Grade, GradeAverage, UpdateGradeDto,
};
use crate::modules::grades::service::GradeService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = Grade),
        (status = 404, description = "Student or subject not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Grades"
)]
pub async fn create_grade(
    State(state): State<AppState>,
    Json(dto): Json<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let grade = GradeService::create_grade(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

#[utoipa::path(
    get,
    path = "/api/grades",
    responses((status = 200, description = "All grades", body = [Grade])),
    tag = "Grades"
)]
pub async fn get_grades(State(state): State<AppState>) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::list_grades(&state.db).await?;
    Ok(Json(grades))
}

#[utoipa::path(
    get,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade id")),
    responses(
        (status = 200, description = "Grade details", body = Grade),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    tag = "Grades"
)]
pub async fn get_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Grade>, AppError> {
    let grade = GradeService::get_grade(&state.db, id).await?;
    Ok(Json(grade))
}

#[utoipa::path(
    get,
    path = "/api/grades/student/{studentId}",
    params(("studentId" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Grades of the student", body = [Grade])),
    tag = "Grades"
)]
pub async fn get_grades_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::get_grades_by_student(&state.db, student_id).await?;
    Ok(Json(grades))
}

#[utoipa::path(
    get,
    path = "/api/grades/subject/{subjectId}",
    params(("subjectId" = i64, Path, description = "Subject id")),
    responses((status = 200, description = "Grades in the subject", body = [Grade])),
    tag = "Grades"
)]
pub async fn get_grades_by_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::get_grades_by_subject(&state.db, subject_id).await?;
    Ok(Json(grades))
}

#[utoipa::path(
    get,
    path = "/api/grades/student/{studentId}/subject/{subjectId}",
    params(
        ("studentId" = i64, Path, description = "Student id"),
        ("subjectId" = i64, Path, description = "Subject id")
    ),
    responses((status = 200, description = "Grades of the student in the subject", body = [Grade])),
    tag = "Grades"
)]
pub async fn get_grades_by_student_and_subject(
    State(state): State<AppState>,
    Path((student_id, subject_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades =
        GradeService::get_grades_by_student_and_subject(&state.db, student_id, subject_id).await?;
    Ok(Json(grades))
}

#[utoipa::path(
    get,
    path = "/api/grades/student/{studentId}/average",
    params(
        ("studentId" = i64, Path, description = "Student id"),
        ("semester" = Option<String>, Query, description = "Optional semester filter")
    ),
    responses((status = 200, description = "Mean grade, zero when no grades match", body = GradeAverage)),
    tag = "Grades"
)]
pub async fn get_student_average(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Query(params): Query<AverageParams>,
) -> Result<Json<GradeAverage>, AppError> {
    let average =
        GradeService::get_student_average(&state.db, student_id, params.semester.as_deref())
            .await?;
    Ok(Json(GradeAverage { average }))
}

#[utoipa::path(
    get,
    path = "/api/grades/subject/{subjectId}/average",
    params(
        ("subjectId" = i64, Path, description = "Subject id"),
        ("semester" = Option<String>, Query, description = "Optional semester filter")
    ),
    responses((status = 200, description = "Mean grade, zero when no grades match", body = GradeAverage)),
    tag = "Grades"
)]
pub async fn get_subject_average(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
    Query(params): Query<AverageParams>,
) -> Result<Json<GradeAverage>, AppError> {
    let average =
        GradeService::get_subject_average(&state.db, subject_id, params.semester.as_deref())
            .await?;
    Ok(Json(GradeAverage { average }))
}

#[utoipa::path(
    put,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade id")),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated", body = Grade),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    tag = "Grades"
)]
pub async fn update_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateGradeDto>,
) -> Result<Json<Grade>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let grade = GradeService::update_grade(&state.db, id, dto).await?;
    Ok(Json(grade))
}

#[utoipa::path(
    delete,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade id")),
    responses(
        (status = 204, description = "Grade deleted"),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    tag = "Grades"
)]
pub async fn delete_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    GradeService::delete_grade(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
