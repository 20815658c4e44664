use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::enums::{Language, Section};

/// A class (group of students). The homeroom teacher is a plain foreign
/// key; enrolled students are a derived lookup on `students.class_id`.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub section: Section,
    pub language: Language,
    pub academic_year: String,
    pub max_capacity: Option<i32>,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub level: String,
    pub section: Section,
    pub language: Language,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: String,
    #[validate(range(min = 1))]
    pub max_capacity: Option<i32>,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub level: Option<String>,
    pub section: Option<Section>,
    pub language: Option<Language>,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: Option<String>,
    #[validate(range(min = 1))]
    pub max_capacity: Option<i32>,
}

/// Headcount summary for a single class.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassStatistics {
    pub class_id: i64,
    pub student_count: i64,
    pub max_capacity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_rejects_zero_capacity() {
        let dto: CreateClassDto = serde_json::from_value(serde_json::json!({
            "name": "CP A",
            "level": "CP",
            "section": "PRIMAIRE",
            "language": "FRANCOPHONE",
            "academicYear": "2024-2025",
            "maxCapacity": 0
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
