use std::path::Path;

use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::modules::documents::model::{Document, UploadMetadata, UploadedFile};
use crate::utils::errors::AppError;
use crate::utils::storage::FileStore;

const DOCUMENT_COLUMNS: &str = "id, name, type, file_path, mime_type, file_size, student_id, \
     created_at, created_by, academic_year, term";

pub struct DocumentService;

impl DocumentService {
    /// Stores the file bytes under a uuid-prefixed name, then inserts the
    /// metadata row pointing at them.
    #[instrument(skip(db, store, file, metadata), fields(file_name = %file.file_name))]
    pub async fn upload_document(
        db: &PgPool,
        store: &dyn FileStore,
        file: UploadedFile,
        metadata: UploadMetadata,
    ) -> Result<Document, AppError> {
        if file.file_name.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Uploaded file must have a name"
            )));
        }

        if let Some(student_id) = metadata.student_id {
            Self::ensure_student_exists(db, student_id).await?;
        }

        let key = format!("{}_{}", Uuid::new_v4(), file.file_name);
        let stored_path = store.save(&key, &file.bytes).await?;

        let result = sqlx::query_as::<_, Document>(&format!(
            "INSERT INTO documents (name, type, file_path, mime_type, file_size, student_id, \
             created_by, academic_year, term) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(&file.file_name)
        .bind(metadata.document_type.as_deref().unwrap_or("OTHER"))
        .bind(stored_path.to_string_lossy().as_ref())
        .bind(&file.content_type)
        .bind(file.bytes.len() as i64)
        .bind(metadata.student_id)
        .bind(&metadata.created_by)
        .bind(&metadata.academic_year)
        .bind(&metadata.term)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)));

        // Do not leave an orphaned file behind when the insert fails.
        if result.is_err() {
            if let Err(cleanup) = store.remove(&stored_path).await {
                warn!(path = %stored_path.display(), error = %cleanup, "orphaned upload cleanup failed");
            }
        }

        result
    }

    #[instrument(skip(db))]
    pub async fn get_document(db: &PgPool, id: i64) -> Result<Document, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Document not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_documents(db: &PgPool) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Fetches the metadata row and reads the bytes back from the store.
    #[instrument(skip(db, store))]
    pub async fn download_document(
        db: &PgPool,
        store: &dyn FileStore,
        id: i64,
    ) -> Result<(Document, Vec<u8>), AppError> {
        let document = Self::get_document(db, id).await?;
        let bytes = store.read(Path::new(&document.file_path)).await?;
        Ok((document, bytes))
    }

    #[instrument(skip(db))]
    pub async fn get_documents_by_student(
        db: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE student_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_documents_by_type(
        db: &PgPool,
        document_type: &str,
    ) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE type = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(document_type)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_documents_by_academic_year(
        db: &PgPool,
        academic_year: &str,
    ) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE academic_year = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(academic_year)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_documents_by_student_and_type(
        db: &PgPool,
        student_id: i64,
        document_type: &str,
    ) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE student_id = $1 AND type = $2 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(student_id)
        .bind(document_type)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    #[instrument(skip(db))]
    pub async fn get_documents_by_creator(
        db: &PgPool,
        created_by: &str,
    ) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE created_by = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(created_by)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))
    }

    /// Two-step delete: file first, then the metadata row. Not atomic; a
    /// crash between the steps leaves a row pointing at a missing file.
    #[instrument(skip(db, store))]
    pub async fn delete_document(
        db: &PgPool,
        store: &dyn FileStore,
        id: i64,
    ) -> Result<(), AppError> {
        let document = Self::get_document(db, id).await?;

        store.remove(Path::new(&document.file_path)).await?;

        sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(())
    }

    async fn ensure_student_exists(db: &PgPool, student_id: i64) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
                .bind(student_id)
                .fetch_one(db)
                .await
                .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }
        Ok(())
    }
}
