use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::students::controller::{
    create_student, delete_student, get_student, get_student_disciplines, get_student_grades,
    get_student_payments, get_students, get_students_by_class, get_students_by_language,
    get_students_by_section, get_students_paginated, search_students, update_student,
};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route("/paginated", get(get_students_paginated))
        .route("/search", get(search_students))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/{id}/grades", get(get_student_grades))
        .route("/{id}/payments", get(get_student_payments))
        .route("/{id}/disciplines", get(get_student_disciplines))
        .route("/class/{class_id}", get(get_students_by_class))
        .route("/section/{section}", get(get_students_by_section))
        .route("/language/{language}", get(get_students_by_language))
}
