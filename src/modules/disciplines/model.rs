use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::enums::DisciplineType;

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: i64,
    pub student_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub discipline_type: DisciplineType,
    pub incident_date: NaiveDate,
    pub description: String,
    pub action: Option<String>,
    pub resolved: bool,
    pub created_at: NaiveDate,
    pub reported_by: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisciplineDto {
    pub student_id: i64,
    #[serde(rename = "type")]
    pub discipline_type: DisciplineType,
    pub incident_date: NaiveDate,
    #[validate(length(min = 1))]
    pub description: String,
    pub action: Option<String>,
    #[validate(length(max = 255))]
    pub reported_by: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDisciplineDto {
    #[serde(rename = "type")]
    pub discipline_type: Option<DisciplineType>,
    pub incident_date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub action: Option<String>,
    pub resolved: Option<bool>,
    #[validate(length(max = 255))]
    pub reported_by: Option<String>,
}

/// Optional action text recorded when an incident is resolved.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDisciplineDto {
    pub action: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecentParams {
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineCount {
    pub student_id: i64,
    pub count: i64,
}

/// Incident counts, total and broken down by outcome and type.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineStatistics {
    pub total: i64,
    pub resolved: i64,
    pub unresolved: i64,
    pub blame_count: i64,
    pub convocation_count: i64,
}
