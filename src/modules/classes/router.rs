use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::classes::controller::{
    assign_teacher, create_class, delete_class, get_class, get_class_statistics,
    get_class_students, get_classes, get_classes_by_academic_year, get_classes_by_language,
    get_classes_by_section, get_classes_by_section_and_language, get_classes_by_teacher,
    update_class,
};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route(
            "/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route("/{id}/students", get(get_class_students))
        .route("/{id}/statistics", get(get_class_statistics))
        .route(
            "/{class_id}/assign-teacher/{teacher_id}",
            put(assign_teacher),
        )
        .route("/section/{section}", get(get_classes_by_section))
        .route(
            "/section/{section}/language/{language}",
            get(get_classes_by_section_and_language),
        )
        .route("/language/{language}", get(get_classes_by_language))
        .route("/academic-year/{year}", get(get_classes_by_academic_year))
        .route("/teacher/{teacher_id}", get(get_classes_by_teacher))
}
