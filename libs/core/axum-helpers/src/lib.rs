//! # Axum Helpers
//!
//! Shared HTTP plumbing for the services in this workspace.
//!
//! - **[`server`]**: documented router, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: the uniform JSON error body and error codes
//! - **[`extractors`]**: validated JSON bodies
//!
//! ```ignore
//! use axum_helpers::{cors_layer_from_env, create_production_app, create_router};
//!
//! let cors = cors_layer_from_env(&Environment::from_env())?;
//! let router = create_router::<ApiDoc>(api_routes, cors);
//! let server = ServerConfig::default();
//! create_production_app(router, &server, server.shutdown_timeout(), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{
    cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, security_headers,
};

pub use errors::{AppError, ErrorCode, ErrorResponse, error_response};

pub use extractors::ValidatedJson;
