use axum::{Router, routing::get, routing::post};

use crate::modules::grades::controller::{
    create_grade, delete_grade, get_grade, get_grades, get_grades_by_student,
    get_grades_by_student_and_subject, get_grades_by_subject, get_student_average,
    get_subject_average, update_grade,
};
use crate::state::AppState;

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_grade).get(get_grades))
        .route(
            "/{id}",
            get(get_grade).put(update_grade).delete(delete_grade),
        )
        .route("/student/{student_id}", get(get_grades_by_student))
        .route("/student/{student_id}/average", get(get_student_average))
        .route(
            "/student/{student_id}/subject/{subject_id}",
            get(get_grades_by_student_and_subject),
        )
        .route("/subject/{subject_id}", get(get_grades_by_subject))
        .route("/subject/{subject_id}/average", get(get_subject_average))
}
