//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into request handlers; the MongoDB handles share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}

#[cfg(test)]
impl AppState {
    /// State whose MongoDB client points at a closed port with short timeouts.
    pub(crate) async fn unreachable() -> Self {
        use crate::config::{Config, Environment};
        use core_config::{app_info, server::ServerConfig};
        use database::mongodb::MongoConfig;

        let url = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";
        let mongo_client = Client::with_uri_str(url).await.unwrap();
        let db = mongo_client.database("users");

        Self {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::with_database(url, "users"),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            mongo_client,
            db,
        }
    }
}
