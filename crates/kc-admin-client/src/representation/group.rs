//! Group representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Field;

/// A group of users.
///
/// Subgroups are decoded for inspection but never reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRepresentation {
    /// Server-assigned id. Unset until the group is created.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Group name.
    pub name: String,
    /// Path in the group hierarchy (e.g. `/parent/child`). Read-only.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub path: Field<String>,
    /// Custom attributes. Keycloak stores every value as a list.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Vec<String>>,
    /// Realm role names granted to members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub realm_roles: Vec<String>,
    /// Client role names granted to members, keyed by client identifier.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub client_roles: BTreeMap<String, Vec<String>>,
    /// Child groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_groups: Vec<GroupRepresentation>,
}

impl GroupRepresentation {
    /// Creates a group with only its name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
