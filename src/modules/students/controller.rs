use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::disciplines::model::Discipline;
use crate::modules::disciplines::service::DisciplineService;
use crate::modules::enums::{Language, Section};
use crate::modules::grades::model::Grade;
use crate::modules::grades::service::GradeService;
use crate::modules::payments::model::Payment;
use crate::modules::payments::service::PaymentService;
use crate::modules::students::model::{CreateStudentDto, SearchParams, Student, UpdateStudentDto};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::{Paginated, PaginationMeta, PaginationParams};

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 404, description = "Referenced class not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(dto): Json<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses((status = 200, description = "All students", body = [Student])),
    tag = "Students"
)]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list_students(&state.db).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/paginated",
    params(PaginationParams),
    responses((status = 200, description = "A page of students", body = Paginated<Student>)),
    tag = "Students"
)]
pub async fn get_students_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Student>>, AppError> {
    let (students, total) =
        StudentService::list_students_paginated(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(Paginated {
        data: students,
        meta: PaginationMeta::new(&params, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(&state.db, id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student id")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let student = StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/students/class/{classId}",
    params(("classId" = i64, Path, description = "Class id")),
    responses((status = 200, description = "Students enrolled in the class", body = [Student])),
    tag = "Students"
)]
pub async fn get_students_by_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students_by_class(&state.db, class_id).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/section/{section}",
    params(("section" = Section, Path, description = "School section")),
    responses((status = 200, description = "Students in the section", body = [Student])),
    tag = "Students"
)]
pub async fn get_students_by_section(
    State(state): State<AppState>,
    Path(section): Path<Section>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students_by_section(&state.db, section).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/language/{language}",
    params(("language" = Language, Path, description = "Instructional language")),
    responses((status = 200, description = "Students in the language track", body = [Student])),
    tag = "Students"
)]
pub async fn get_students_by_language(
    State(state): State<AppState>,
    Path(language): Path<Language>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students_by_language(&state.db, language).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/search",
    params(SearchParams),
    responses((status = 200, description = "Matching students", body = [Student])),
    tag = "Students"
)]
pub async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::search_students(&state.db, &params.q).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}/grades",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student's grades", body = [Grade]),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student_grades(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Grade>>, AppError> {
    StudentService::get_student(&state.db, id).await?;
    let grades = GradeService::get_grades_by_student(&state.db, id).await?;
    Ok(Json(grades))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}/payments",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student's payments", body = [Payment]),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student_payments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Payment>>, AppError> {
    StudentService::get_student(&state.db, id).await?;
    let payments = PaymentService::get_payments_by_student(&state.db, id).await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}/disciplines",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student's disciplinary records", body = [Discipline]),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student_disciplines(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    StudentService::get_student(&state.db, id).await?;
    let disciplines = DisciplineService::get_disciplines_by_student(&state.db, id).await?;
    Ok(Json(disciplines))
}
