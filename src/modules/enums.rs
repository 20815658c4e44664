//! Domain enumerations shared across resource modules.
//!
//! JSON representation and the PostgreSQL enum labels are both
//! SCREAMING_SNAKE_CASE, so values round-trip unchanged between the wire,
//! the database and path parameters. An invalid value in a path or query
//! parameter fails serde deserialization and surfaces as a plain 400.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "gender", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// School division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "section", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Creche,
    Maternelle,
    Primaire,
}

/// Instructional track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "language", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Francophone,
    Anglophone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Teacher,
    AdminStaff,
    AcademicStaff,
    StudyDirector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "payment_mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    BankTransfer,
    MobileMoney,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "discipline_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisciplineType {
    Blame,
    Convocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_as_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Section::Creche).unwrap(), "\"CRECHE\"");
        assert_eq!(
            serde_json::to_string(&PaymentMode::BankTransfer).unwrap(),
            "\"BANK_TRANSFER\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::StudyDirector).unwrap(),
            "\"STUDY_DIRECTOR\""
        );
    }

    #[test]
    fn invalid_enum_values_fail_to_deserialize() {
        assert!(serde_json::from_str::<Section>("\"LYCEE\"").is_err());
        assert!(serde_json::from_str::<DisciplineType>("\"WARNING\"").is_err());
    }
}
