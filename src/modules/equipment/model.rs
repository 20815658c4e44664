use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub serial_number: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub maintenance_date: Option<NaiveDate>,
    pub status: String,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub model: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub maintenance_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub status: String,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 255))]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub serial_number: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub model: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub maintenance_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 255))]
    pub assigned_to: Option<String>,
}
