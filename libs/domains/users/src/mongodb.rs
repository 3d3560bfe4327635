//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::StoreResult;
use crate::models::{NewUser, UserChanges, UserRecord};
use crate::repository::{UserRepository, parse_id};

const COLLECTION: &str = "users";

pub struct MongoUserRepository {
    collection: Collection<UserRecord>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<UserRecord>(COLLECTION),
        }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<UserRecord>(collection_name),
        }
    }

    /// Create the unique `username` index. Safe to call on every startup.
    #[instrument(skip(self))]
    pub async fn init_indexes(&self) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(collection = COLLECTION, "User indexes ensured");
        Ok(())
    }

    fn set_document(changes: &UserChanges) -> Document {
        let mut set = Document::new();
        if let Some(ref username) = changes.username {
            set.insert("username", username.as_str());
        }
        if let Some(ref password) = changes.password {
            set.insert("password", password.as_str());
        }
        set
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: NewUser) -> StoreResult<UserRecord> {
        let record = UserRecord::new(user);
        self.collection.insert_one(&record).await?;

        tracing::info!(user_id = %record.id, "User created");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<UserRecord>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<UserRecord> = cursor.try_collect().await?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        let oid = parse_id(id)?;
        Ok(self.collection.find_one(doc! { "_id": oid }).await?)
    }

    #[instrument(skip(self, changes))]
    async fn update_one(&self, id: &str, changes: UserChanges) -> StoreResult<()> {
        let oid = parse_id(id)?;
        if changes.is_empty() {
            return Ok(());
        }

        let result = self
            .collection
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": Self::set_document(&changes) },
            )
            .await?;

        tracing::info!(
            user_id = %oid,
            matched = result.matched_count,
            modified = result.modified_count,
            "User updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_only_contains_present_fields() {
        let set = MongoUserRepository::set_document(&UserChanges {
            username: Some("user2".to_string()),
            password: None,
        });
        assert_eq!(set, doc! { "username": "user2" });
    }

    #[test]
    fn test_set_document_empty_changes() {
        assert!(MongoUserRepository::set_document(&UserChanges::default()).is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_mongo_round_trip() {
        use crate::error::StoreError;

        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongodb::Client::with_uri_str(&url).await.unwrap();
        let db = client.database("users_test");
        let repo = MongoUserRepository::with_collection(&db, "users_round_trip");
        repo.collection.drop().await.ok();
        repo.init_indexes().await.unwrap();

        let created = repo
            .create(NewUser {
                username: "alice".to_string(),
                password: "hashed".to_string(),
            })
            .await
            .unwrap();

        let duplicate = repo
            .create(NewUser {
                username: "alice".to_string(),
                password: "other".to_string(),
            })
            .await;
        assert!(matches!(duplicate, Err(StoreError::DuplicateKey(_))));

        let found = repo.find_by_id(&created.id.to_hex()).await.unwrap();
        assert_eq!(found, Some(created));
        assert!(matches!(
            repo.find_by_id("1").await,
            Err(StoreError::InvalidId(_))
        ));
    }
}
