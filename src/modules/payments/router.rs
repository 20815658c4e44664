use axum::{Router, routing::get, routing::post};

use crate::modules::payments::controller::{
    create_payment, get_payments, get_payments_by_student, get_total_paid,
};
use crate::state::AppState;

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_payment).get(get_payments))
        .route("/student/{student_id}", get(get_payments_by_student))
        .route("/student/{student_id}/total", get(get_total_paid))
}
