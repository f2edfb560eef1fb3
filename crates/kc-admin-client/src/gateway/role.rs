//! Client role gateway.

use crate::error::AdminResult;
use crate::representation::RoleRepresentation;
use crate::session::Session;
use crate::transport::Transport;

/// Roles of one client, addressed by role name.
#[derive(Debug)]
pub struct ClientRoleGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> ClientRoleGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, realm: &str, client: &str, name: &str) -> String {
        self.session.address(
            &self.session.endpoints().client_role,
            &[("realm", realm), ("client", client), ("role", name)],
        )
    }

    /// Gets a client role by name.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn get(&self, realm: &str, client: &str, name: &str) -> AdminResult<RoleRepresentation> {
        self.session.fetch(&self.address(realm, client, name)).await
    }

    /// Creates a client role and returns the server's copy, id included.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure, or `MissingLocation`.
    pub async fn create(
        &self,
        realm: &str,
        client: &str,
        role: &RoleRepresentation,
    ) -> AdminResult<RoleRepresentation> {
        let address = self.session.address(
            &self.session.endpoints().client_roles,
            &[("realm", realm), ("client", client)],
        );
        self.session.create_and_fetch(&address, role).await
    }

    /// Replaces the role stored under `name`; `role` may carry a new name.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn update(
        &self,
        realm: &str,
        client: &str,
        name: &str,
        role: &RoleRepresentation,
    ) -> AdminResult<()> {
        self.session
            .replace(&self.address(realm, client, name), Some(role))
            .await
    }

    /// Deletes a client role.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn delete(&self, realm: &str, client: &str, name: &str) -> AdminResult<()> {
        self.session
            .remove::<()>(&self.address(realm, client, name), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::testing::{RecordingTransport, Reply};
    use crate::{RoleRepresentation, Session};

    const ROLES: &str = "http://kc/auth/admin/realms/acme/clients/c1/roles";

    #[tokio::test]
    async fn update_addresses_stored_name() {
        let session = Session::new(RecordingTransport::new(), "http://kc", "acme");
        let role = RoleRepresentation::new("reader").with_description("Reads");

        session
            .client_roles()
            .update("acme", "c1", "viewer", &role)
            .await
            .unwrap();

        let calls = session.transport().calls();
        assert_eq!(calls[0].verb, "PUT");
        assert_eq!(calls[0].address, format!("{ROLES}/viewer"));
        assert_eq!(
            calls[0].body,
            Some(json!({"name": "reader", "description": "Reads"}))
        );
    }

    #[tokio::test]
    async fn create_returns_server_copy() {
        let location = format!("{ROLES}/viewer");
        let transport = RecordingTransport::new()
            .on("POST", ROLES, Reply::Location(location.clone()))
            .on(
                "GET",
                &location,
                Reply::Json(json!({"id": "r-1", "name": "viewer", "clientRole": true})),
            );
        let session = Session::new(transport, "http://kc", "acme");

        let role = session
            .client_roles()
            .create("acme", "c1", &RoleRepresentation::new("viewer"))
            .await
            .unwrap();

        assert!(role.matches("r-1"));
    }
}
