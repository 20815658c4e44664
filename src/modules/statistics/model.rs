use serde::Serialize;
use utoipa::ToSchema;

/// School-wide headline numbers for the dashboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolStatistics {
    pub total_classes: i64,
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_subjects: i64,
    pub classes_by_section: ClassesBySection,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassesBySection {
    pub creche: i64,
    pub maternelle: i64,
    pub primaire: i64,
}
