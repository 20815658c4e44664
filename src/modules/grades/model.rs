use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub value: Decimal,
    pub semester: String,
    pub academic_year: String,
    pub exam_type: Option<String>,
    pub grade_date: NaiveDate,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeDto {
    pub student_id: i64,
    pub subject_id: i64,
    pub value: Decimal,
    #[validate(length(min = 1, max = 50))]
    pub semester: String,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: String,
    #[validate(length(min = 1, max = 50))]
    pub exam_type: Option<String>,
    pub grade_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGradeDto {
    pub value: Option<Decimal>,
    #[validate(length(min = 1, max = 50))]
    pub semester: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub exam_type: Option<String>,
    pub grade_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// Optional semester filter for the average endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AverageParams {
    pub semester: Option<String>,
}

/// Average wrapper so the endpoint returns an object, not a bare number.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeAverage {
    pub average: Decimal,
}
