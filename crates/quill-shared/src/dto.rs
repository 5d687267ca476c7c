//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Incoming post payload for create and update requests.
///
/// Clients may send `id`, `userId` and `version`, but those fields are
/// untrusted: update always keeps the stored values, and on create the
/// storage layer normalizes the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub user_id: i32,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub version: Option<i32>,
}

impl PostPayload {
    /// Validate the field constraints for creation.
    ///
    /// Returns every violation rather than stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push("title must not be empty".to_string());
        }
        if self.body.is_empty() {
            errors.push("body must not be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_passes() {
        let payload = PostPayload {
            id: 0,
            user_id: 1,
            title: "Hello".into(),
            body: "World".into(),
            version: None,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn empty_fields_are_all_reported() {
        let payload = PostPayload {
            id: 0,
            user_id: 1,
            title: String::new(),
            body: String::new(),
            version: None,
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn identity_fields_are_optional_in_json() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title":"t","body":"b"}"#).unwrap();
        assert_eq!(payload.id, 0);
        assert_eq!(payload.user_id, 0);
        assert_eq!(payload.version, None);
    }
}
