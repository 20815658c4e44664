use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::modules::documents::model::{Document, UploadMetadata, UploadedFile};
use crate::modules::documents::service::DocumentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// Keeps the download filename inside the header quoted-string grammar:
/// quotes and backslashes are dropped, control and non-ASCII bytes become
/// underscores.
fn disposition_filename(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '"' && *c != '\\')
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect()
}

/// Pulls the `file` part and the optional metadata fields out of the
/// multipart body.
async fn parse_upload(
    mut multipart: Multipart,
) -> Result<(UploadedFile, UploadMetadata), AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut metadata = UploadMetadata::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::bad_request(anyhow::anyhow!("Failed to read file part: {}", e))
                })?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "studentId" => {
                let text = read_text_field(field).await?;
                let id = text.parse::<i64>().map_err(|_| {
                    AppError::bad_request(anyhow::anyhow!("studentId must be an integer"))
                })?;
                metadata.student_id = Some(id);
            }
            "type" => metadata.document_type = Some(read_text_field(field).await?),
            "academicYear" => metadata.academic_year = Some(read_text_field(field).await?),
            "term" => metadata.term = Some(read_text_field(field).await?),
            "createdBy" => metadata.created_by = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| {
        AppError::bad_request(anyhow::anyhow!("Missing required multipart field: file"))
    })?;
    Ok((file, metadata))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Malformed multipart field: {}", e)))
}

#[utoipa::path(
    post,
    path = "/api/documents/upload",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Document stored", body = Document),
        (status = 400, description = "Missing or malformed file part", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let (file, metadata) = parse_upload(multipart).await?;
    let document =
        DocumentService::upload_document(&state.db, state.file_store.as_ref(), file, metadata)
            .await?;
    Ok((StatusCode::CREATED, Json(document)))
}

#[utoipa::path(
    get,
    path = "/api/documents",
    responses((status = 200, description = "All documents", body = [Document])),
    tag = "Documents"
)]
pub async fn get_documents(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let documents = DocumentService::list_documents(&state.db).await?;
    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document metadata", body = Document),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Document>, AppError> {
    let document = DocumentService::get_document(&state.db, id).await?;
    Ok(Json(document))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}/download",
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 200, description = "Raw file bytes with the stored mime type"),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Stored file missing on disk", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let (document, bytes) =
        DocumentService::download_document(&state.db, state.file_store.as_ref(), id).await?;

    let content_type = document
        .mime_type
        .as_deref()
        .unwrap_or("application/octet-stream")
        .to_string();
    let disposition = format!(
        "attachment; filename=\"{}\"",
        disposition_filename(&document.name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/documents/student/{studentId}",
    params(("studentId" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Documents attached to the student", body = [Document])),
    tag = "Documents"
)]
pub async fn get_documents_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = DocumentService::get_documents_by_student(&state.db, student_id).await?;
    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/documents/type/{type}",
    params(("type" = String, Path, description = "Document type")),
    responses((status = 200, description = "Documents of the type", body = [Document])),
    tag = "Documents"
)]
pub async fn get_documents_by_type(
    State(state): State<AppState>,
    Path(document_type): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = DocumentService::get_documents_by_type(&state.db, &document_type).await?;
    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/documents/academic-year/{year}",
    params(("year" = String, Path, description = "Academic year")),
    responses((status = 200, description = "Documents for the academic year", body = [Document])),
    tag = "Documents"
)]
pub async fn get_documents_by_academic_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = DocumentService::get_documents_by_academic_year(&state.db, &year).await?;
    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/documents/student/{studentId}/type/{type}",
    params(
        ("studentId" = i64, Path, description = "Student id"),
        ("type" = String, Path, description = "Document type")
    ),
    responses((status = 200, description = "Student documents of the type", body = [Document])),
    tag = "Documents"
)]
pub async fn get_documents_by_student_and_type(
    State(state): State<AppState>,
    Path((student_id, document_type)): Path<(i64, String)>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents =
        DocumentService::get_documents_by_student_and_type(&state.db, student_id, &document_type)
            .await?;
    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/documents/created-by/{createdBy}",
    params(("createdBy" = String, Path, description = "Uploader name")),
    responses((status = 200, description = "Documents uploaded by the person", body = [Document])),
    tag = "Documents"
)]
pub async fn get_documents_by_creator(
    State(state): State<AppState>,
    Path(created_by): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = DocumentService::get_documents_by_creator(&state.db, &created_by).await?;
    Ok(Json(documents))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 204, description = "Document and file deleted"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    DocumentService::delete_document(&state.db, state.file_store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
