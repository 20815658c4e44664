use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::enums::{Gender, UserRole};

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub role: Option<UserRole>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<Decimal>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub role: Option<UserRole>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    #[validate(length(max = 100))]
    pub position: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    pub salary: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub role: Option<UserRole>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    #[validate(length(max = 100))]
    pub position: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    pub salary: Option<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchParams {
    pub q: String,
}
