use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Metadata row for an uploaded file. The bytes live in the configured
/// file store; `file_path` points at them.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub document_type: String,
    pub file_path: String,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub student_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub academic_year: Option<String>,
    pub term: Option<String>,
}

/// Upload fields accompanying the multipart `file` part.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub student_id: Option<i64>,
    pub document_type: Option<String>,
    pub academic_year: Option<String>,
    pub term: Option<String>,
    pub created_by: Option<String>,
}

/// Raw file part extracted from the multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
