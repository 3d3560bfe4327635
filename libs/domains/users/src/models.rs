use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A user document as stored in the `users` collection.
///
/// `password` holds the Argon2 PHC string, never the plaintext. Extra stored
/// fields (`__v`, timestamps) are ignored when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(user: NewUser) -> Self {
        Self {
            id: ObjectId::new(),
            username: user.username,
            password: user.password,
        }
    }
}

/// Insert payload handed to the store; `password` is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Public projection of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    /// Hex ObjectId
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "new_user1")]
    pub username: String,
}

/// Registration body
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "username should not be empty"))]
    #[schema(example = "new_user1")]
    pub username: String,

    #[validate(length(min = 1, message = "password should not be empty"))]
    #[schema(example = "password")]
    pub password: String,
}

/// Partial update body. An empty string means "leave unchanged".
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateUser {
    /// Omit falsy-valued optional fields from the update set.
    ///
    /// Absent and empty-string fields are both dropped, so an update whose
    /// fields are all empty changes nothing.
    pub fn into_changes(self) -> UserChanges {
        UserChanges {
            username: truthy(self.username),
            password: truthy(self.password),
        }
    }
}

fn truthy(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Fields to `$set` on a single user record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Acknowledgement returned by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl MessageResponse {
    pub fn created() -> Self {
        Self {
            message: "User created successfully.".to_string(),
            status_code: 201,
        }
    }

    pub fn updated() -> Self {
        Self {
            message: "User updated successfully.".to_string(),
            status_code: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn test_into_changes_drops_empty_fields() {
        let changes = UpdateUser {
            username: Some("user2".to_string()),
            password: Some(String::new()),
        }
        .into_changes();

        assert_eq!(changes.username.as_deref(), Some("user2"));
        assert!(changes.password.is_none());
    }

    #[test]
    fn test_all_empty_update_is_empty() {
        let changes = UpdateUser {
            username: Some(String::new()),
            password: None,
        }
        .into_changes();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_update_body_fields_are_optional() {
        let update: UpdateUser = serde_json::from_str("{}").unwrap();
        assert!(update.into_changes().is_empty());
    }

    #[test]
    fn test_create_user_rejects_empty_fields() {
        let input = CreateUser {
            username: String::new(),
            password: String::new(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_record_ignores_unknown_stored_fields() {
        let id = ObjectId::new();
        let record: UserRecord = from_document(doc! {
            "_id": id,
            "username": "alice",
            "password": "$argon2id$v=19$...",
            "__v": 0,
        })
        .unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.username, "alice");
    }

    #[test]
    fn test_message_response_uses_camel_case_status() {
        let json = serde_json::to_value(MessageResponse::created()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "User created successfully.", "statusCode": 201})
        );
    }
}
