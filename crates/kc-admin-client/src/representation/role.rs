//! Role representations.

use serde::{Deserialize, Serialize};

use super::Field;

/// A realm or client role.
///
/// Role ids are generated by the server and cannot be derived from the
/// name; anything that mutates a relationship by role must resolve the name
/// to an id first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRepresentation {
    /// Server-assigned id. Unset until the role is created.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Role name, unique within its realm or client.
    pub name: String,
    /// Role description.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Whether the role references other roles. Read-only.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub composite: Field<bool>,
    /// Whether the role belongs to a client. Read-only.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub client_role: Field<bool>,
    /// Id of the owning realm or client. Read-only.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub container_id: Field<String>,
}

impl RoleRepresentation {
    /// Creates a role with only its name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Field::Value(description.into());
        self
    }

    /// Whether `identifier` names this role, by exact name or id.
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        self.name == identifier || self.id.value().is_some_and(|id| id == identifier)
    }
}

/// Reference to a role by id, as the composites endpoints expect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleReference {
    /// Role id.
    pub id: String,
}

impl RoleReference {
    /// Creates a reference to the role with `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Whether a role mapping targets realm roles or one client's roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleScope {
    /// Realm-level roles.
    Realm,
    /// Roles of the client with this server id.
    Client(String),
}

impl RoleScope {
    /// Scope for an optional client id; `None` or an empty id means realm.
    #[must_use]
    pub fn from_client(client: Option<&str>) -> Self {
        match client {
            Some(id) if !id.is_empty() => Self::Client(id.to_string()),
            _ => Self::Realm,
        }
    }

    /// Client id of a client scope.
    #[must_use]
    pub fn client(&self) -> Option<&str> {
        match self {
            Self::Realm => None,
            Self::Client(id) => Some(id),
        }
    }
}
