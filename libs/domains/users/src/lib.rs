//! Users Domain
//!
//! Registration, listing, lookup and partial update of users stored in MongoDB.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /user
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← existence checks, partial-update filter, error classification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Mapper    │  ← stored record → public view
//! └─────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_users::{handlers, MongoUserRepository, UserService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("users");
//!
//! let repository = MongoUserRepository::new(&db);
//! repository.init_indexes().await?;
//!
//! let router = axum::Router::new().nest("/user", handlers::router(UserService::new(repository)));
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod mongodb;
pub mod password;
pub mod repository;
pub mod service;

pub use error::{ErrorKind, StoreError, StoreResult, UserError, UserResult};
pub use handlers::ApiDoc;
pub use mapper::UserMapper;
pub use models::{CreateUser, MessageResponse, NewUser, UpdateUser, UserChanges, UserRecord, UserView};
pub use crate::mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
