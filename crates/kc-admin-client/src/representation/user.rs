//! User representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Field;

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRepresentation {
    /// Server-assigned id. Unset until the user is created.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Login name. Cannot change once the user exists.
    pub username: String,
    /// Whether the account is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Given name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    /// Actions the user must complete on next login
    /// (`CONFIGURE_TOTP`, `UPDATE_PASSWORD`, `UPDATE_PROFILE`, `VERIFY_EMAIL`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_actions: Vec<String>,
    /// Custom attributes. Keycloak stores every value as a list.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Vec<String>>,
}

impl UserRepresentation {
    /// Creates an enabled user.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            enabled: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_payload() {
        let json = serde_json::to_value(UserRepresentation::new("jdoe", "jdoe@acme.test")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "jdoe", "enabled": true, "email": "jdoe@acme.test"})
        );
    }

    #[test]
    fn decodes_server_user_without_email() {
        let json = r#"{
            "id": "u-1",
            "username": "svc",
            "enabled": true,
            "createdTimestamp": 1700000000000,
            "attributes": {"team": ["platform"]}
        }"#;

        let user: UserRepresentation = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, Field::Value("u-1".to_string()));
        assert_eq!(user.email, "");
        assert!(user.first_name.is_unset());
        assert_eq!(user.attributes["team"], vec!["platform".to_string()]);
    }
}
