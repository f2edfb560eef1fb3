//! Client representation.

use serde::{Deserialize, Serialize};

use super::Field;

/// A client (application) registered in a realm.
///
/// Some server-side client settings are not mapped here; the server keeps
/// its values for them across updates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRepresentation {
    /// Server-assigned id. Unset until the client is created.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Client identifier used in protocol flows.
    pub client_id: String,
    /// Whether the client is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Authenticator for confidential clients (e.g. `client-secret`).
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub client_authenticator_type: Field<String>,
    /// Valid redirect URIs. Always sent, so an empty list clears them.
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    /// Allowed CORS origins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_origins: Vec<String>,
    /// Protocol (`openid-connect` or `saml`).
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub protocol: Field<String>,
    /// Public clients authenticate without a secret.
    #[serde(default)]
    pub public_client: bool,
    /// Bearer-only clients never initiate logins.
    #[serde(default)]
    pub bearer_only: bool,
    /// Whether a service-account user backs this client.
    #[serde(default)]
    pub service_accounts_enabled: bool,
}

impl ClientRepresentation {
    /// Creates an enabled public client.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            enabled: true,
            public_client: true,
            ..Default::default()
        }
    }

    /// Whether the server keeps a secret for this client.
    #[must_use]
    pub const fn is_confidential(&self) -> bool {
        !self.public_client && !self.bearer_only
    }
}

/// A client secret as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSecret {
    /// Credential type, normally `secret`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Secret value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_omits_id() {
        let json = serde_json::to_value(ClientRepresentation::new("portal")).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["clientId"], "portal");
        assert_eq!(json["redirectUris"], serde_json::json!([]));
        assert_eq!(json["publicClient"], true);
    }

    #[test]
    fn confidentiality() {
        let mut client = ClientRepresentation::new("backend");
        assert!(!client.is_confidential());

        client.public_client = false;
        assert!(client.is_confidential());

        client.bearer_only = true;
        assert!(!client.is_confidential());
    }

    #[test]
    fn decodes_client_secret() {
        let secret: ClientSecret =
            serde_json::from_str(r#"{"type": "secret", "value": "s3cr3t"}"#).unwrap();
        assert_eq!(secret.kind, "secret");
        assert_eq!(secret.value, "s3cr3t");
    }
}
