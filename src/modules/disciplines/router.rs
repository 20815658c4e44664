use axum::{Router, routing::get, routing::post};

use crate::modules::disciplines::controller::{
    count_by_student, create_discipline, delete_discipline, get_discipline, get_disciplines,
    get_disciplines_by_date_range, get_disciplines_by_date_range_paginated,
    get_disciplines_by_resolved, get_disciplines_by_student, get_disciplines_by_type,
    get_disciplines_paginated, get_pending_actions, get_recent_disciplines, get_statistics,
    get_unresolved_by_student, resolve_discipline, update_discipline,
};
use crate::state::AppState;

pub fn init_disciplines_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_discipline).get(get_disciplines))
        .route("/paginated", get(get_disciplines_paginated))
        .route("/date-range", get(get_disciplines_by_date_range))
        .route(
            "/date-range-paginated",
            get(get_disciplines_by_date_range_paginated),
        )
        .route("/recent", get(get_recent_disciplines))
        .route("/pending-actions", get(get_pending_actions))
        .route("/statistics", get(get_statistics))
        .route("/student/{student_id}", get(get_disciplines_by_student))
        .route(
            "/student/{student_id}/unresolved",
            get(get_unresolved_by_student),
        )
        .route("/student/{student_id}/count", get(count_by_student))
        .route("/type/{type}", get(get_disciplines_by_type))
        .route("/resolved/{resolved}", get(get_disciplines_by_resolved))
        .route("/{id}/resolve", post(resolve_discipline))
        .route(
            "/{id}",
            get(get_discipline)
                .put(update_discipline)
                .delete(delete_discipline),
        )
}
