use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::teachers::controller::{
    create_teacher, delete_teacher, get_teacher, get_teacher_by_email, get_teacher_classes,
    get_teacher_subjects, get_teachers, get_teachers_by_specialization, search_teachers,
    update_teacher,
};
use crate::state::AppState;

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers))
        .route("/search", get(search_teachers))
        .route(
            "/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
        .route("/{id}/classes", get(get_teacher_classes))
        .route("/{id}/subjects", get(get_teacher_subjects))
        .route("/email/{email}", get(get_teacher_by_email))
        .route(
            "/specialization/{specialization}",
            get(get_teachers_by_specialization),
        )
}
