//! Student entity and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::modules::enums::{Gender, Language, Section};

/// A student row. The class membership is stored as a plain foreign key;
/// the class side is always a derived lookup, never a stored back-pointer.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub section: Section,
    pub language: Language,
    pub academic_year: String,
    pub parent_name: String,
    pub parent_phone: Option<String>,
    pub parent_email: Option<String>,
    pub address: Option<String>,
    pub class_id: Option<i64>,
    pub registration_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub section: Section,
    pub language: Language,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: String,
    #[validate(length(min = 1, max = 255))]
    pub parent_name: String,
    #[validate(length(max = 50))]
    pub parent_phone: Option<String>,
    #[validate(email)]
    pub parent_email: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub class_id: Option<i64>,
}

/// Partial update: only provided fields change. An omitted field keeps its
/// stored value; there is no way to clear a nullable field through PUT.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub section: Option<Section>,
    pub language: Option<Language>,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub parent_name: Option<String>,
    #[validate(length(max = 50))]
    pub parent_phone: Option<String>,
    #[validate(email)]
    pub parent_email: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub class_id: Option<i64>,
}

/// Free-text search over first and last names.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateStudentDto {
        CreateStudentDto {
            first_name: "Amina".to_string(),
            last_name: "Ngo".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2018, 3, 14).unwrap(),
            gender: Gender::Female,
            section: Section::Maternelle,
            language: Language::Francophone,
            academic_year: "2024-2025".to_string(),
            parent_name: "Mme Ngo".to_string(),
            parent_phone: None,
            parent_email: None,
            address: None,
            class_id: None,
        }
    }

    #[test]
    fn create_dto_accepts_valid_input() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_empty_name() {
        let mut dto = valid_dto();
        dto.first_name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_bad_parent_email() {
        let mut dto = valid_dto();
        dto.parent_email = Some("not-an-email".to_string());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_uses_camel_case_wire_names() {
        let json = serde_json::json!({
            "firstName": "Paul",
            "lastName": "Biya",
            "dateOfBirth": "2017-06-01",
            "gender": "MALE",
            "section": "PRIMAIRE",
            "language": "ANGLOPHONE",
            "academicYear": "2024-2025",
            "parentName": "M. Biya"
        });
        let dto: CreateStudentDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.first_name, "Paul");
        assert_eq!(dto.section, Section::Primaire);
    }

    #[test]
    fn update_dto_allows_all_fields_omitted() {
        let dto: UpdateStudentDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.first_name.is_none());
    }
}
