use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::enums::PaymentMode;

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub student_id: i64,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_mode: PaymentMode,
    pub payment_type: String,
    pub academic_year: String,
    pub description: Option<String>,
    pub receipt_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub student_id: i64,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_mode: PaymentMode,
    #[validate(length(min = 1, max = 100))]
    pub payment_type: String,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: String,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub receipt_number: Option<String>,
}

/// Optional academic-year filter for the per-student total.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalParams {
    pub academic_year: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTotal {
    pub student_id: i64,
    pub total: Decimal,
}
