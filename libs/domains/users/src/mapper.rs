use crate::models::{UserRecord, UserView};

/// Projects stored records onto [`UserView`], dropping the password and any
/// storage metadata.
pub struct UserMapper;

impl UserMapper {
    pub fn to_view(record: &UserRecord) -> UserView {
        UserView {
            id: record.id.to_hex(),
            username: record.username.clone(),
        }
    }

    /// Maps in input order, moving each username out of its record.
    pub fn to_views(records: Vec<UserRecord>) -> Vec<UserView> {
        records
            .into_iter()
            .map(|record| UserView {
                id: record.id.to_hex(),
                username: record.username,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn record(username: &str) -> UserRecord {
        UserRecord {
            id: ObjectId::new(),
            username: username.to_string(),
            password: "hashed".to_string(),
        }
    }

    #[test]
    fn test_to_view_renames_id_and_drops_password() {
        let record = record("alice");
        let view = UserMapper::to_view(&record);

        assert_eq!(view.id, record.id.to_hex());
        assert_eq!(view.username, "alice");

        let json = serde_json::to_value(&view).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id".to_string(), "username".to_string()]);
    }

    #[test]
    fn test_to_views_preserves_order() {
        let views = UserMapper::to_views(vec![record("a"), record("b"), record("c")]);
        let names: Vec<_> = views.iter().map(|v| v.username.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
