//! Server infrastructure: documented router, health endpoints, graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let api_routes = Router::new()
//!     .nest("/user", users_router)
//!     .merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(api_routes, cors);
//! create_production_app(router, &config.server, config.server.shutdown_timeout(), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
