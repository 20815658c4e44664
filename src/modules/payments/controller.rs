use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::payments::model::{CreatePaymentDto, Payment, PaymentTotal, TotalParams};
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(dto): Json<CreatePaymentDto>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let payment = PaymentService::create_payment(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/api/payments",
    responses((status = 200, description = "All payments", body = [Payment])),
    tag = "Payments"
)]
pub async fn get_payments(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = PaymentService::list_payments(&state.db).await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/payments/student/{studentId}",
    params(("studentId" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Payments made by the student", body = [Payment])),
    tag = "Payments"
)]
pub async fn get_payments_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = PaymentService::get_payments_by_student(&state.db, student_id).await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/payments/student/{studentId}/total",
    params(
        ("studentId" = i64, Path, description = "Student id"),
        ("academicYear" = Option<String>, Query, description = "Optional academic-year filter")
    ),
    responses(
        (status = 200, description = "Total paid, zero when no payments match", body = PaymentTotal),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn get_total_paid(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Query(params): Query<TotalParams>,
) -> Result<Json<PaymentTotal>, AppError> {
    let total =
        PaymentService::get_total_paid(&state.db, student_id, params.academic_year.as_deref())
            .await?;
    Ok(Json(PaymentTotal { student_id, total }))
}
