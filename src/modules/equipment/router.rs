use axum::{Router, routing::get, routing::post};

use crate::modules::equipment::controller::{
    create_equipment, delete_equipment, get_all_equipment, get_equipment,
    get_equipment_by_assignee, get_equipment_by_category, get_equipment_by_location,
    get_equipment_by_serial, get_equipment_by_status, get_maintenance_due, get_under_warranty,
    update_equipment,
};
use crate::state::AppState;

pub fn init_equipment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_equipment).get(get_all_equipment))
        .route("/maintenance-due", get(get_maintenance_due))
        .route("/under-warranty", get(get_under_warranty))
        .route("/serial/{serial_number}", get(get_equipment_by_serial))
        .route("/category/{category}", get(get_equipment_by_category))
        .route("/location/{location}", get(get_equipment_by_location))
        .route("/status/{status}", get(get_equipment_by_status))
        .route("/assigned-to/{assigned_to}", get(get_equipment_by_assignee))
        .route(
            "/{id}",
            get(get_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
}
