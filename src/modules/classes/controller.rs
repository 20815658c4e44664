use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::classes::model::{Class, ClassStatistics, CreateClassDto, UpdateClassDto};
use crate::modules::classes::service::ClassService;
use crate::modules::enums::{Language, Section};
use crate::modules::students::model::Student;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 409, description = "Duplicate name/level/section/language tuple", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    Json(dto): Json<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

#[utoipa::path(
    get,
    path = "/api/classes",
    responses((status = 200, description = "All classes", body = [Class])),
    tag = "Classes"
)]
pub async fn get_classes(State(state): State<AppState>) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_classes(&state.db).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class details", body = Class),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::get_class(&state.db, id).await?;
    Ok(Json(class))
}

#[utoipa::path(
    get,
    path = "/api/classes/section/{section}",
    params(("section" = Section, Path, description = "School section")),
    responses((status = 200, description = "Classes in the section", body = [Class])),
    tag = "Classes"
)]
pub async fn get_classes_by_section(
    State(state): State<AppState>,
    Path(section): Path<Section>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_section(&state.db, section).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/language/{language}",
    params(("language" = Language, Path, description = "Instructional language")),
    responses((status = 200, description = "Classes in the language track", body = [Class])),
    tag = "Classes"
)]
pub async fn get_classes_by_language(
    State(state): State<AppState>,
    Path(language): Path<Language>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_language(&state.db, language).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/section/{section}/language/{language}",
    params(
        ("section" = Section, Path, description = "School section"),
        ("language" = Language, Path, description = "Instructional language")
    ),
    responses((status = 200, description = "Classes matching both filters", body = [Class])),
    tag = "Classes"
)]
pub async fn get_classes_by_section_and_language(
    State(state): State<AppState>,
    Path((section, language)): Path<(Section, Language)>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes =
        ClassService::get_classes_by_section_and_language(&state.db, section, language).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/academic-year/{year}",
    params(("year" = String, Path, description = "Academic year, e.g. 2024-2025")),
    responses((status = 200, description = "Classes for the academic year", body = [Class])),
    tag = "Classes"
)]
pub async fn get_classes_by_academic_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_academic_year(&state.db, &year).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/teacher/{teacherId}",
    params(("teacherId" = i64, Path, description = "Homeroom teacher id")),
    responses((status = 200, description = "Classes led by the teacher", body = [Class])),
    tag = "Classes"
)]
pub async fn get_classes_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_teacher(&state.db, teacher_id).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}/students",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Students enrolled in the class", body = [Student]),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn get_class_students(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Student>>, AppError> {
    ClassService::get_class(&state.db, id).await?;
    let students = StudentService::get_students_by_class(&state.db, id).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}/statistics",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Headcount against capacity", body = ClassStatistics),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn get_class_statistics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClassStatistics>, AppError> {
    let stats = ClassService::get_class_statistics(&state.db, id).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class id")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Class updated", body = Class),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let class = ClassService::update_class(&state.db, id, dto).await?;
    Ok(Json(class))
}

#[utoipa::path(
    put,
    path = "/api/classes/{classId}/assign-teacher/{teacherId}",
    params(
        ("classId" = i64, Path, description = "Class id"),
        ("teacherId" = i64, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Homeroom teacher assigned", body = Class),
        (status = 404, description = "Class or teacher not found", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn assign_teacher(
    State(state): State<AppState>,
    Path((class_id, teacher_id)): Path<(i64, i64)>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::assign_teacher(&state.db, class_id, teacher_id).await?;
    Ok(Json(class))
}

#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 204, description = "Class deleted"),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 409, description = "Class still has students", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    ClassService::delete_class(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
