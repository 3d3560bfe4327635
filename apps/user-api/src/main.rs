use axum_helpers::{cors_layer_from_env, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{env_file_name, load_env_file};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // `.env.<APP_ENV>` (or `.env`) must be loaded before any config is read
    let env_loaded = load_env_file();
    let config = Config::from_env()?;

    init_tracing(&config.environment);
    if env_loaded {
        info!("Loaded environment from {}", env_file_name());
    }

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());
    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    api::users::init_indexes(&db).await?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let cors = cors_layer_from_env(&state.config.environment)?;
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), cors);

    let server = state.config.server.clone();
    let mongo_client = state.mongo_client.clone();

    info!(
        "Starting User API (shutdown timeout {:?})",
        server.shutdown_timeout()
    );

    create_production_app(app, &server, server.shutdown_timeout(), async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User API shutdown complete");
    Ok(())
}
