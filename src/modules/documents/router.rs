use axum::{Router, routing::get, routing::post};

use crate::modules::documents::controller::{
    delete_document, download_document, get_document, get_documents,
    get_documents_by_academic_year, get_documents_by_creator, get_documents_by_student,
    get_documents_by_student_and_type, get_documents_by_type, upload_document,
};
use crate::state::AppState;

pub fn init_documents_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_documents))
        .route("/upload", post(upload_document))
        .route("/{id}", get(get_document).delete(delete_document))
        .route("/{id}/download", get(download_document))
        .route("/student/{student_id}", get(get_documents_by_student))
        .route(
            "/student/{student_id}/type/{type}",
            get(get_documents_by_student_and_type),
        )
        .route("/type/{type}", get(get_documents_by_type))
        .route(
            "/academic-year/{year}",
            get(get_documents_by_academic_year),
        )
        .route("/created-by/{created_by}", get(get_documents_by_creator))
}
