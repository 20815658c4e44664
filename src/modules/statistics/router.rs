use axum::{Router, routing::get};

use crate::modules::statistics::controller::get_school_statistics;
use crate::state::AppState;

pub fn init_statistics_router() -> Router<AppState> {
    Router::new().route("/", get(get_school_statistics))
}
