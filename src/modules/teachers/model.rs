use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::modules::enums::Gender;

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub specialization: Option<String>,
    pub task_description: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub specialization: Option<String>,
    pub task_description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub specialization: Option<String>,
    pub task_description: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_requires_names() {
        let dto: Result<CreateTeacherDto, _> = serde_json::from_str("{}");
        assert!(dto.is_err());

        let dto: CreateTeacherDto =
            serde_json::from_str(r#"{"firstName": "Marie", "lastName": "Fouda"}"#).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_invalid_email() {
        let dto: CreateTeacherDto = serde_json::from_str(
            r#"{"firstName": "Marie", "lastName": "Fouda", "email": "nope"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
