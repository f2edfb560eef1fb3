//! Address templates for the admin API.
//!
//! Path shapes depend on the server version (Keycloak 17 dropped the `/auth`
//! context path), so every entity kind has its own overridable template.
//! Templates use `{base}` for the server address and named placeholders for
//! path segments; segment values are percent-encoded on expansion.

use serde::{Deserialize, Serialize};

/// Context path used by servers older than Keycloak 17.
pub const LEGACY_CONTEXT_PATH: &str = "/auth";

/// One address template per entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Token endpoint: `{realm}`.
    pub token: String,

    /// Realm collection.
    pub realms: String,
    /// Single realm: `{realm}`.
    pub realm: String,

    /// Client collection: `{realm}`.
    pub clients: String,
    /// Single client: `{realm}`, `{id}`.
    pub client: String,
    /// Client secret: `{realm}`, `{id}`.
    pub client_secret: String,
    /// Service-account user of a client: `{realm}`, `{id}`.
    pub client_service_account_user: String,

    /// Client role collection: `{realm}`, `{client}`.
    pub client_roles: String,
    /// Single client role: `{realm}`, `{client}`, `{role}`.
    pub client_role: String,
    /// Composites of a client role: `{realm}`, `{client}`, `{role}`.
    pub client_role_composites: String,

    /// User collection: `{realm}`.
    pub users: String,
    /// Single user: `{realm}`, `{id}`.
    pub user: String,

    /// Group collection: `{realm}`.
    pub groups: String,
    /// Single group: `{realm}`, `{id}`.
    pub group: String,
    /// Members of a group: `{realm}`, `{group}`.
    pub group_members: String,
    /// One user's membership in one group: `{realm}`, `{user}`, `{group}`.
    pub user_group: String,

    /// Realm roles mapped to a user: `{realm}`, `{user}`.
    pub realm_role_mappings: String,
    /// Realm roles a user could be given: `{realm}`, `{user}`.
    pub available_realm_role_mappings: String,
    /// Effective realm roles of a user: `{realm}`, `{user}`.
    pub effective_realm_role_mappings: String,
    /// Client roles mapped to a user: `{realm}`, `{user}`, `{client}`.
    pub client_role_mappings: String,
    /// Client roles a user could be given: `{realm}`, `{user}`, `{client}`.
    pub available_client_role_mappings: String,
    /// Effective client roles of a user: `{realm}`, `{user}`, `{client}`.
    pub effective_client_role_mappings: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_context_path(LEGACY_CONTEXT_PATH)
    }
}

impl Endpoints {
    /// Builds the standard templates under a context path (`/auth` or `""`).
    #[must_use]
    pub fn with_context_path(context_path: &str) -> Self {
        let ctx = context_path.trim_end_matches('/');
        let admin = format!("{{base}}{ctx}/admin/realms");
        let user_mappings = format!("{admin}/{{realm}}/users/{{user}}/role-mappings");

        Self {
            token: format!("{{base}}{ctx}/realms/{{realm}}/protocol/openid-connect/token"),

            realms: admin.clone(),
            realm: format!("{admin}/{{realm}}"),

            clients: format!("{admin}/{{realm}}/clients"),
            client: format!("{admin}/{{realm}}/clients/{{id}}"),
            client_secret: format!("{admin}/{{realm}}/clients/{{id}}/client-secret"),
            client_service_account_user: format!(
                "{admin}/{{realm}}/clients/{{id}}/service-account-user"
            ),

            client_roles: format!("{admin}/{{realm}}/clients/{{client}}/roles"),
            client_role: format!("{admin}/{{realm}}/clients/{{client}}/roles/{{role}}"),
            client_role_composites: format!(
                "{admin}/{{realm}}/clients/{{client}}/roles/{{role}}/composites"
            ),

            users: format!("{admin}/{{realm}}/users"),
            user: format!("{admin}/{{realm}}/users/{{id}}"),

            groups: format!("{admin}/{{realm}}/groups"),
            group: format!("{admin}/{{realm}}/groups/{{id}}"),
            group_members: format!("{admin}/{{realm}}/groups/{{group}}/members"),
            user_group: format!("{admin}/{{realm}}/users/{{user}}/groups/{{group}}"),

            realm_role_mappings: format!("{user_mappings}/realm"),
            available_realm_role_mappings: format!("{user_mappings}/realm/available"),
            effective_realm_role_mappings: format!("{user_mappings}/realm/composite"),
            client_role_mappings: format!("{user_mappings}/clients/{{client}}"),
            available_client_role_mappings: format!("{user_mappings}/clients/{{client}}/available"),
            effective_client_role_mappings: format!("{user_mappings}/clients/{{client}}/composite"),
        }
    }
}

/// Expands a template against a base address and named segment values.
///
/// The base address is inserted verbatim (minus a trailing slash); every
/// segment value is percent-encoded.
#[must_use]
pub fn expand(template: &str, base: &str, params: &[(&str, &str)]) -> String {
    let mut address = template.replace("{base}", base.trim_end_matches('/'));
    for (name, value) in params {
        address = address.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    address
}
