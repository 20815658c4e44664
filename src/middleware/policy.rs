//! Pluggable access control.
//!
//! Authorization is currently disabled: every request is permitted. The
//! policy is still routed through a trait so a real implementation can be
//! substituted in [`crate::state::AppState`] without touching any business
//! logic.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Decides whether a request may proceed.
pub trait AccessPolicy: Send + Sync {
    fn allows(&self, method: &Method, path: &str) -> bool;
}

/// The default policy: every request is allowed.
#[derive(Clone, Copy, Debug)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn allows(&self, _method: &Method, _path: &str) -> bool {
        true
    }
}

pub async fn enforce_policy(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if !state.access_policy.allows(req.method(), req.uri().path()) {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}
