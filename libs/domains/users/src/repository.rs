use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewUser, UserChanges, UserRecord};

/// Persistence primitives for user records.
///
/// Identifiers are hex ObjectId strings. Malformed identifiers fail with
/// [`StoreError::InvalidId`] and username collisions with
/// [`StoreError::DuplicateKey`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>>;

    async fn create(&self, user: NewUser) -> StoreResult<UserRecord>;

    /// All records in store order
    async fn find_all(&self) -> StoreResult<Vec<UserRecord>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>>;

    /// Apply `changes` to the record with `id`. Matching nothing is not an error.
    async fn update_one(&self, id: &str, changes: UserChanges) -> StoreResult<()>;
}

pub(crate) fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// In-memory store for development and tests, kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: NewUser) -> StoreResult<UserRecord> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateKey(format!(
                "username '{}' already exists",
                user.username
            )));
        }

        let record = UserRecord::new(user);
        users.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        let oid = parse_id(id)?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == oid).cloned())
    }

    async fn update_one(&self, id: &str, changes: UserChanges) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let mut users = self.users.write().await;

        if let Some(ref username) = changes.username {
            if users.iter().any(|u| u.id != oid && &u.username == username) {
                return Err(StoreError::DuplicateKey(format!(
                    "username '{}' already exists",
                    username
                )));
            }
        }

        if let Some(record) = users.iter_mut().find(|u| u.id == oid) {
            if let Some(username) = changes.username {
                record.username = username;
            }
            if let Some(password) = changes.password {
                record.password = password;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "hashed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();

        let err = repo.create(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_malformed_vs_absent() {
        let repo = InMemoryUserRepository::new();

        assert!(matches!(
            repo.find_by_id("1").await,
            Err(StoreError::InvalidId(_))
        ));
        assert!(
            repo.find_by_id(&ObjectId::new().to_hex())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(new_user(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_one_applies_only_present_fields() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("alice")).await.unwrap();
        let id = created.id.to_hex();

        repo.update_one(
            &id,
            UserChanges {
                username: Some("alicia".to_string()),
                password: None,
            },
        )
        .await
        .unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.username, "alicia");
        assert_eq!(stored.password, "hashed");
    }

    #[tokio::test]
    async fn test_update_one_rejects_taken_username() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();
        let bob = repo.create(new_user("bob")).await.unwrap();

        let err = repo
            .update_one(
                &bob.id.to_hex(),
                UserChanges {
                    username: Some("alice".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn test_update_one_keeping_own_username_is_allowed() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create(new_user("alice")).await.unwrap();

        let changes = UserChanges {
            username: Some("alice".to_string()),
            password: None,
        };
        assert!(repo.update_one(&alice.id.to_hex(), changes).await.is_ok());
    }
}
