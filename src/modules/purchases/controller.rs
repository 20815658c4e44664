use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::purchases::model::{
    CreatePurchaseDto, DateRangeParams, Purchase, PurchaseTotal, SpendSummaryRow,
    UpdatePurchaseDto,
};
use crate::modules::purchases::service::PurchaseService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::{Paginated, PaginationMeta, PaginationParams};

#[utoipa::path(
    post,
    path = "/api/purchases",
    request_body = CreatePurchaseDto,
    responses(
        (status = 201, description = "Purchase recorded", body = Purchase),
        (status = 400, description = "Business rule violated", body = ErrorResponse),
        (status = 409, description = "Duplicate invoice number", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(dto): Json<CreatePurchaseDto>,
) -> Result<(StatusCode, Json<Purchase>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let purchase = PurchaseService::create_purchase(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

#[utoipa::path(
    get,
    path = "/api/purchases",
    responses((status = 200, description = "All purchases", body = [Purchase])),
    tag = "Purchases"
)]
pub async fn get_purchases(State(state): State<AppState>) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = PurchaseService::list_purchases(&state.db).await?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get,
    path = "/api/purchases/{id}",
    params(("id" = i64, Path, description = "Purchase id")),
    responses(
        (status = 200, description = "Purchase details", body = Purchase),
        (status = 404, description = "Purchase not found", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Purchase>, AppError> {
    let purchase = PurchaseService::get_purchase(&state.db, id).await?;
    Ok(Json(purchase))
}

#[utoipa::path(
    get,
    path = "/api/purchases/invoice/{invoiceNumber}",
    params(("invoiceNumber" = String, Path, description = "Invoice number")),
    responses(
        (status = 200, description = "Purchase for the invoice", body = Purchase),
        (status = 404, description = "No purchase with this invoice number", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_purchase_by_invoice(
    State(state): State<AppState>,
    Path(invoice_number): Path<String>,
) -> Result<Json<Purchase>, AppError> {
    let purchase = PurchaseService::get_purchase_by_invoice(&state.db, &invoice_number).await?;
    Ok(Json(purchase))
}

#[utoipa::path(
    get,
    path = "/api/purchases/date-range",
    params(
        ("startDate" = String, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = String, Query, description = "Inclusive end date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Purchases within the range", body = [Purchase]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_purchases_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases =
        PurchaseService::get_purchases_by_date_range(&state.db, range.start_date, range.end_date)
            .await?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get,
    path = "/api/purchases/date-range/paginated",
    params(
        ("startDate" = String, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = String, Query, description = "Inclusive end date (YYYY-MM-DD)"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, capped at 100")
    ),
    responses(
        (status = 200, description = "One page of purchases within the range", body = Paginated<Purchase>),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_purchases_by_date_range_paginated(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Purchase>>, AppError> {
    let (purchases, total) = PurchaseService::get_purchases_by_date_range_paginated(
        &state.db,
        range.start_date,
        range.end_date,
        params.limit(),
        params.offset(),
    )
    .await?;

    Ok(Json(Paginated {
        data: purchases,
        meta: PaginationMeta::new(&params, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/purchases/supplier/{supplier}",
    params(("supplier" = String, Path, description = "Supplier name substring, case-insensitive")),
    responses((status = 200, description = "Purchases from matching suppliers", body = [Purchase])),
    tag = "Purchases"
)]
pub async fn get_purchases_by_supplier(
    State(state): State<AppState>,
    Path(supplier): Path<String>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = PurchaseService::get_purchases_by_supplier(&state.db, &supplier).await?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get,
    path = "/api/purchases/category/{category}",
    params(("category" = String, Path, description = "Exact category")),
    responses((status = 200, description = "Purchases in the category", body = [Purchase])),
    tag = "Purchases"
)]
pub async fn get_purchases_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = PurchaseService::get_purchases_by_category(&state.db, &category).await?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get,
    path = "/api/purchases/supplier/{supplier}/date-range",
    params(
        ("supplier" = String, Path, description = "Supplier name substring"),
        ("startDate" = String, Query, description = "Inclusive start date"),
        ("endDate" = String, Query, description = "Inclusive end date")
    ),
    responses(
        (status = 200, description = "Supplier purchases within the range", body = [Purchase]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_purchases_by_supplier_and_date_range(
    State(state): State<AppState>,
    Path(supplier): Path<String>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = PurchaseService::get_purchases_by_supplier_and_date_range(
        &state.db,
        &supplier,
        range.start_date,
        range.end_date,
    )
    .await?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get,
    path = "/api/purchases/category/{category}/date-range",
    params(
        ("category" = String, Path, description = "Exact category"),
        ("startDate" = String, Query, description = "Inclusive start date"),
        ("endDate" = String, Query, description = "Inclusive end date")
    ),
    responses(
        (status = 200, description = "Category purchases within the range", body = [Purchase]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_purchases_by_category_and_date_range(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = PurchaseService::get_purchases_by_category_and_date_range(
        &state.db,
        &category,
        range.start_date,
        range.end_date,
    )
    .await?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get,
    path = "/api/purchases/total",
    params(
        ("startDate" = String, Query, description = "Inclusive start date"),
        ("endDate" = String, Query, description = "Inclusive end date")
    ),
    responses(
        (status = 200, description = "Total spend within the range, zero when empty", body = PurchaseTotal),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_total_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<PurchaseTotal>, AppError> {
    let total =
        PurchaseService::get_total_by_date_range(&state.db, range.start_date, range.end_date)
            .await?;
    Ok(Json(PurchaseTotal { total }))
}

#[utoipa::path(
    get,
    path = "/api/purchases/total/supplier/{supplier}",
    params(("supplier" = String, Path, description = "Supplier name substring")),
    responses((status = 200, description = "Total spend for the supplier, zero when empty", body = PurchaseTotal)),
    tag = "Purchases"
)]
pub async fn get_total_by_supplier(
    State(state): State<AppState>,
    Path(supplier): Path<String>,
) -> Result<Json<PurchaseTotal>, AppError> {
    let total = PurchaseService::get_total_by_supplier(&state.db, &supplier).await?;
    Ok(Json(PurchaseTotal { total }))
}

#[utoipa::path(
    get,
    path = "/api/purchases/total/category/{category}",
    params(("category" = String, Path, description = "Exact category")),
    responses((status = 200, description = "Total spend for the category, zero when empty", body = PurchaseTotal)),
    tag = "Purchases"
)]
pub async fn get_total_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<PurchaseTotal>, AppError> {
    let total = PurchaseService::get_total_by_category(&state.db, &category).await?;
    Ok(Json(PurchaseTotal { total }))
}

#[utoipa::path(
    get,
    path = "/api/purchases/summary/category",
    params(
        ("startDate" = String, Query, description = "Inclusive start date"),
        ("endDate" = String, Query, description = "Inclusive end date")
    ),
    responses(
        (status = 200, description = "Per-category spend within the range", body = [SpendSummaryRow]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_summary_by_category(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<SpendSummaryRow>>, AppError> {
    let summary =
        PurchaseService::get_summary_by_category(&state.db, range.start_date, range.end_date)
            .await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/purchases/summary/supplier",
    params(
        ("startDate" = String, Query, description = "Inclusive start date"),
        ("endDate" = String, Query, description = "Inclusive end date")
    ),
    responses(
        (status = 200, description = "Per-supplier spend within the range", body = [SpendSummaryRow]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn get_summary_by_supplier(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<Vec<SpendSummaryRow>>, AppError> {
    let summary =
        PurchaseService::get_summary_by_supplier(&state.db, range.start_date, range.end_date)
            .await?;
    Ok(Json(summary))
}

#[utoipa::path(
    put,
    path = "/api/purchases/{id}",
    params(("id" = i64, Path, description = "Purchase id")),
    request_body = UpdatePurchaseDto,
    responses(
        (status = 200, description = "Purchase updated with recomputed total", body = Purchase),
        (status = 400, description = "Business rule violated", body = ErrorResponse),
        (status = 404, description = "Purchase not found", body = ErrorResponse),
        (status = 409, description = "Duplicate invoice number", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdatePurchaseDto>,
) -> Result<Json<Purchase>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let purchase = PurchaseService::update_purchase(&state.db, id, dto).await?;
    Ok(Json(purchase))
}

#[utoipa::path(
    delete,
    path = "/api/purchases/{id}",
    params(("id" = i64, Path, description = "Purchase id")),
    responses(
        (status = 204, description = "Purchase deleted"),
        (status = 404, description = "Purchase not found", body = ErrorResponse)
    ),
    tag = "Purchases"
)]
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    PurchaseService::delete_purchase(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
