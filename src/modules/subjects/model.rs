use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::enums::{Language, Section};

/// A taught subject. `teacher_id` is the primary teacher; additional
/// teachers live in the `subject_teachers` join table.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub section: Option<Section>,
    pub language: Option<Language>,
    pub level: Option<String>,
    pub credits: i32,
    pub coefficient: i32,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,
    pub description: Option<String>,
    pub section: Option<Section>,
    pub language: Option<Language>,
    #[validate(length(min = 1, max = 50))]
    pub level: Option<String>,
    #[validate(range(min = 1))]
    pub credits: Option<i32>,
    #[validate(range(min = 1))]
    pub coefficient: Option<i32>,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubjectDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,
    pub description: Option<String>,
    pub section: Option<Section>,
    pub language: Option<Language>,
    #[validate(length(min = 1, max = 50))]
    pub level: Option<String>,
    #[validate(range(min = 1))]
    pub credits: Option<i32>,
    #[validate(range(min = 1))]
    pub coefficient: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchParams {
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_defaults_are_absent_not_zero() {
        let dto: CreateSubjectDto = serde_json::from_value(serde_json::json!({
            "name": "Mathematics",
            "section": "PRIMAIRE"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.credits.is_none());
        assert!(dto.coefficient.is_none());
    }

    #[test]
    fn create_dto_rejects_zero_coefficient() {
        let dto: CreateSubjectDto = serde_json::from_value(serde_json::json!({
            "name": "Mathematics",
            "coefficient": 0
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
