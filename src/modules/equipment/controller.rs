use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::modules::equipment::model::{CreateEquipmentDto, Equipment, UpdateEquipmentDto};
use crate::modules::equipment::service::EquipmentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/equipment",
    request_body = CreateEquipmentDto,
    responses(
        (status = 201, description = "Equipment registered", body = Equipment),
        (status = 409, description = "Duplicate serial number", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(dto): Json<CreateEquipmentDto>,
) -> Result<(StatusCode, Json<Equipment>), AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let equipment = EquipmentService::create_equipment(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

#[utoipa::path(
    get,
    path = "/api/equipment",
    responses((status = 200, description = "All equipment", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_all_equipment(
    State(state): State<AppState>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::list_equipment(&state.db).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    params(("id" = i64, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Equipment>, AppError> {
    let equipment = EquipmentService::get_equipment(&state.db, id).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/serial/{serialNumber}",
    params(("serialNumber" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Equipment with the serial number", body = Equipment),
        (status = 404, description = "No equipment with this serial number", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn get_equipment_by_serial(
    State(state): State<AppState>,
    Path(serial_number): Path<String>,
) -> Result<Json<Equipment>, AppError> {
    let equipment = EquipmentService::get_equipment_by_serial(&state.db, &serial_number).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/category/{category}",
    params(("category" = String, Path, description = "Exact category")),
    responses((status = 200, description = "Equipment in the category", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_equipment_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::get_equipment_by_category(&state.db, &category).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/location/{location}",
    params(("location" = String, Path, description = "Exact location")),
    responses((status = 200, description = "Equipment at the location", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_equipment_by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::get_equipment_by_location(&state.db, &location).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/status/{status}",
    params(("status" = String, Path, description = "Exact status")),
    responses((status = 200, description = "Equipment with the status", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_equipment_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::get_equipment_by_status(&state.db, &status).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/assigned-to/{assignedTo}",
    params(("assignedTo" = String, Path, description = "Assignee name")),
    responses((status = 200, description = "Equipment assigned to the person", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_equipment_by_assignee(
    State(state): State<AppState>,
    Path(assigned_to): Path<String>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::get_equipment_by_assignee(&state.db, &assigned_to).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/maintenance-due",
    responses((status = 200, description = "Equipment with an overdue maintenance date", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_maintenance_due(
    State(state): State<AppState>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::get_maintenance_due(&state.db).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    get,
    path = "/api/equipment/under-warranty",
    responses((status = 200, description = "Equipment whose warranty has not expired", body = [Equipment])),
    tag = "Equipment"
)]
pub async fn get_under_warranty(
    State(state): State<AppState>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let equipment = EquipmentService::get_under_warranty(&state.db).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    params(("id" = i64, Path, description = "Equipment id")),
    request_body = UpdateEquipmentDto,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found", body = ErrorResponse),
        (status = 409, description = "Duplicate serial number", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateEquipmentDto>,
) -> Result<Json<Equipment>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let equipment = EquipmentService::update_equipment(&state.db, id, dto).await?;
    Ok(Json(equipment))
}

#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    params(("id" = i64, Path, description = "Equipment id")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    EquipmentService::delete_equipment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
