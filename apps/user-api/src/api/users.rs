//! User routes wired to the MongoDB repository

use axum::Router;
use domain_users::{MongoUserRepository, StoreResult, UserService, handlers};
use mongodb::Database;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    handlers::router(UserService::new(repository))
}

/// Create the unique username index before serving.
pub async fn init_indexes(db: &Database) -> StoreResult<()> {
    MongoUserRepository::new(db).init_indexes().await
}
