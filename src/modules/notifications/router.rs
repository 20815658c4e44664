use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::modules::notifications::controller::{
    create_notification, delete_notification, get_notifications_by_user, get_unread_by_user,
    mark_as_read,
};
use crate::state::AppState;

pub fn init_notifications_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_notification))
        .route("/user/{user_id}", get(get_notifications_by_user))
        .route("/user/{user_id}/unread", get(get_unread_by_user))
        .route("/{id}/read", put(mark_as_read))
        .route("/{id}", delete(delete_notification))
}
