use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::users::controller::{
    activate_user, change_password, create_user, deactivate_user, delete_user, get_active_users,
    get_user, get_users, get_users_by_role, login, update_user,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(get_users))
        .route("/login", post(login))
        .route("/active", get(get_active_users))
        .route("/role/{role}", get(get_users_by_role))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/{id}/password", put(change_password))
        .route("/{id}/activate", post(activate_user))
        .route("/{id}/deactivate", post(deactivate_user))
}
