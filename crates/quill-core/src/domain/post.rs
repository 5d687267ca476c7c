use serde::{Deserialize, Serialize};

/// Post entity - represents a single authored post.
///
/// Ids are assigned by the persistence layer; a zero id marks a record
/// that has not been stored yet. `version` is reserved for optimistic
/// concurrency and is carried but never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub version: Option<i32>,
}

impl Post {
    /// Create a new, not-yet-persisted post.
    pub fn new(user_id: i32, title: String, body: String) -> Self {
        Self {
            id: 0,
            user_id,
            title,
            body,
            version: None,
        }
    }

    /// Merge an incoming payload into this stored record.
    ///
    /// Only `title` and `body` are taken from the payload; the stored
    /// `id`, `user_id` and `version` always win. Callers cannot reassign
    /// a record to another user or move it to another id through an
    /// update.
    pub fn merged_with(&self, title: String, body: String) -> Self {
        Self {
            id: self.id,
            user_id: self.user_id,
            title,
            body,
            version: self.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_has_no_id() {
        let post = Post::new(7, "Title".into(), "Body".into());
        assert_eq!(post.id, 0);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.version, None);
    }

    #[test]
    fn merge_keeps_identity_fields() {
        let stored = Post {
            id: 3,
            user_id: 9,
            title: "old title".into(),
            body: "old body".into(),
            version: Some(2),
        };

        let merged = stored.merged_with("new title".into(), "new body".into());

        assert_eq!(merged.id, 3);
        assert_eq!(merged.user_id, 9);
        assert_eq!(merged.version, Some(2));
        assert_eq!(merged.title, "new title");
        assert_eq!(merged.body, "new body");
    }

    #[test]
    fn serializes_camel_case_with_explicit_null_version() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "Hello world".into(),
            body: "This is my first post.".into(),
            version: None,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 1);
        assert!(json.as_object().unwrap().contains_key("version"));
        assert!(json["version"].is_null());
    }
}
