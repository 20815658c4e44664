use axum::{Router, routing::get, routing::post};

use crate::modules::staff::controller::{
    create_staff, delete_staff, get_staff_by_department, get_staff_by_email, get_staff_by_position,
    get_staff_by_role, get_staff_member, get_staff_members, get_staff_paginated, search_staff,
    update_staff,
};
use crate::state::AppState;

pub fn init_staff_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_staff).get(get_staff_members))
        .route("/paginated", get(get_staff_paginated))
        .route("/search", get(search_staff))
        .route(
            "/{id}",
            get(get_staff_member).put(update_staff).delete(delete_staff),
        )
        .route("/department/{department}", get(get_staff_by_department))
        .route("/position/{position}", get(get_staff_by_position))
        .route("/role/{role}", get(get_staff_by_role))
        .route("/email/{email}", get(get_staff_by_email))
}
