use std::sync::Arc;
use tracing::instrument;

use crate::error::{
    ID_NOT_CORRECT, StoreError, USER_ALREADY_EXISTS, USER_NOT_FOUND, USERNAME_ALREADY_EXISTS,
    UserError, UserResult,
};
use crate::mapper::UserMapper;
use crate::models::{CreateUser, NewUser, UpdateUser, UserView};
use crate::password::hash_password;
use crate::repository::UserRepository;

/// User business logic.
///
/// Each operation classifies store failures at the point they occur; an
/// already classified [`UserError`] is never re-wrapped.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user with a hashed password.
    ///
    /// The username pre-check gives a friendly error; the unique index still
    /// decides concurrent registrations, and its rejection is reported the
    /// same way.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: CreateUser) -> UserResult<()> {
        let existing = self
            .repository
            .find_by_username(&input.username)
            .await
            .map_err(UserError::internal)?;

        if existing.is_some() {
            return Err(UserError::Conflict(USER_ALREADY_EXISTS.to_string()));
        }

        let password = hash_password(&input.password).map_err(UserError::internal)?;
        let new_user = NewUser {
            username: input.username,
            password,
        };

        match self.repository.create(new_user).await {
            Ok(record) => {
                tracing::info!(user_id = %record.id, "User registered");
                Ok(())
            }
            Err(StoreError::DuplicateKey(_)) => {
                Err(UserError::Conflict(USER_ALREADY_EXISTS.to_string()))
            }
            Err(e) => Err(UserError::internal(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> UserResult<Vec<UserView>> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(UserError::internal)?;

        Ok(UserMapper::to_views(records))
    }

    /// Absent → `NotFound`, malformed id → `InvalidInput`, anything else → `Internal`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> UserResult<UserView> {
        match self.repository.find_by_id(id).await {
            Ok(Some(record)) => Ok(UserMapper::to_view(&record)),
            Ok(None) => Err(UserError::NotFound(USER_NOT_FOUND.to_string())),
            Err(StoreError::InvalidId(_)) => {
                Err(UserError::InvalidInput(ID_NOT_CORRECT.to_string()))
            }
            Err(e) => Err(UserError::internal(e)),
        }
    }

    /// Apply a partial update to an existing user.
    ///
    /// The target is resolved through [`get_by_id`](Self::get_by_id) first and
    /// its failure returned as is. Empty fields are left out of the update and
    /// a supplied password is hashed before it is stored.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateUser) -> UserResult<()> {
        self.get_by_id(id).await?;

        let mut changes = input.into_changes();
        if let Some(password) = changes.password.take() {
            changes.password = Some(hash_password(&password).map_err(UserError::internal)?);
        }

        match self.repository.update_one(id, changes).await {
            Ok(()) => Ok(()),
            Err(StoreError::DuplicateKey(_)) => {
                Err(UserError::Conflict(USERNAME_ALREADY_EXISTS.to_string()))
            }
            Err(e) => Err(UserError::internal(e)),
        }
    }
}
