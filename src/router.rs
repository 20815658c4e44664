use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::policy::enforce_policy;
use crate::modules::classes::router::init_classes_router;
use crate::modules::disciplines::router::init_disciplines_router;
use crate::modules::documents::router::init_documents_router;
use crate::modules::equipment::router::init_equipment_router;
use crate::modules::grades::router::init_grades_router;
use crate::modules::notifications::router::init_notifications_router;
use crate::modules::payments::router::init_payments_router;
use crate::modules::purchases::router::init_purchases_router;
use crate::modules::staff::router::init_staff_router;
use crate::modules::statistics::router::init_statistics_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/students", init_students_router())
                .nest("/teachers", init_teachers_router())
                .nest("/staff", init_staff_router())
                .nest("/classes", init_classes_router())
                .nest("/subjects", init_subjects_router())
                .nest("/grades", init_grades_router())
                .nest("/payments", init_payments_router())
                .nest("/purchases", init_purchases_router())
                .nest("/equipment", init_equipment_router())
                .nest("/disciplines", init_disciplines_router())
                .nest("/documents", init_documents_router())
                .nest("/users", init_users_router())
                .nest("/notifications", init_notifications_router())
                .nest("/statistics", init_statistics_router())
                .route_layer(middleware::from_fn_with_state(state.clone(), enforce_policy)),
        )
        .with_state(state.clone())
        .layer(init_cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}

fn init_cors_layer(state: &AppState) -> CorsLayer {
    if state.cors_config.allow_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}
