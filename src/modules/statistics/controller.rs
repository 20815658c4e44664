use axum::{Json, extract::State};

use crate::modules::statistics::model::SchoolStatistics;
use crate::modules::statistics::service::StatisticsService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/statistics",
    responses((status = 200, description = "School-wide totals", body = SchoolStatistics)),
    tag = "Statistics"
)]
pub async fn get_school_statistics(
    State(state): State<AppState>,
) -> Result<Json<SchoolStatistics>, AppError> {
    let statistics = StatisticsService::get_school_statistics(&state.db).await?;
    Ok(Json(statistics))
}
