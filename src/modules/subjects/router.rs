use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::subjects::controller::{
    assign_subject_teacher, create_subject, delete_subject, get_subject, get_subjects,
    get_subjects_by_section, get_subjects_by_teacher, remove_subject_teacher, search_subjects,
    update_subject,
};
use crate::state::AppState;

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subject).get(get_subjects))
        .route("/search", get(search_subjects))
        .route(
            "/{id}",
            get(get_subject).put(update_subject).delete(delete_subject),
        )
        .route("/teacher/{teacher_id}", get(get_subjects_by_teacher))
        .route("/section/{section}", get(get_subjects_by_section))
        .route("/{subject_id}/teacher/{teacher_id}", post(assign_subject_teacher))
        .route("/{subject_id}/teacher", delete(remove_subject_teacher))
}
