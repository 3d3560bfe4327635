//! HTTP routes for the user API

pub mod health;
pub mod users;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// All API routes, mounted at the root by `axum_helpers::create_router`.
///
/// Liveness (`/health`) and readiness (`/ready`) sit alongside `/user` so they
/// share the router's tracing, security-header and CORS layers.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/user", users::router(state))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}
