use async_trait::async_trait;
use kc_admin_client::{find_role, AdminResult, RoleRepresentation, RoleScope, Session, Transport};

use crate::driver::Resource;

/// One role mapped directly to one user.
///
/// A mapping has no fields of its own. Changing the role is a replacement:
/// the previously mapped role is unmapped and the new one mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredUserRoleMapping {
    /// Realm name.
    pub realm: String,
    /// Server id of the user.
    pub user: String,
    /// Realm roles, or the roles of one client.
    pub scope: RoleScope,
    /// Role name or id.
    pub role: String,
    /// Role currently mapped in place of `role`, when replacing.
    pub replaces: Option<String>,
}

impl DesiredUserRoleMapping {
    /// Creates a desired mapping.
    #[must_use]
    pub fn new(
        realm: impl Into<String>,
        user: impl Into<String>,
        scope: RoleScope,
        role: impl Into<String>,
    ) -> Self {
        Self {
            realm: realm.into(),
            user: user.into(),
            scope,
            role: role.into(),
            replaces: None,
        }
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredUserRoleMapping {
    type State = RoleRepresentation;

    fn kind(&self) -> &'static str {
        "user role mapping"
    }

    fn key(&self) -> String {
        match self.scope.client() {
            Some(client) => format!("{}/{}/{}/{}", self.realm, self.user, client, self.role),
            None => format!("{}/{}/{}", self.realm, self.user, self.role),
        }
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<RoleRepresentation> {
        session
            .role_mappings()
            .add(&self.realm, &self.user, &self.scope, &self.role)
            .await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<RoleRepresentation> {
        let assigned = session
            .role_mappings()
            .assigned(&self.realm, &self.user, &self.scope)
            .await?;
        find_role(&assigned, &self.role).cloned()
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<RoleRepresentation> {
        match self.replaces.as_deref() {
            Some(previous) if previous != self.role => {
                let mappings = session.role_mappings();
                mappings
                    .remove(&self.realm, &self.user, &self.scope, previous)
                    .await?;
                mappings
                    .add(&self.realm, &self.user, &self.scope, &self.role)
                    .await
            }
            _ => self.read(session).await,
        }
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        session
            .role_mappings()
            .remove(&self.realm, &self.user, &self.scope, &self.role)
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use kc_admin_client::testing::{RecordingTransport, Reply};
    use kc_admin_client::Session;
    use serde_json::json;

    use super::*;
    use crate::driver::{Operation, Reconciler};

    const MAPPINGS: &str = "http://kc/auth/admin/realms/acme/users/u-1/role-mappings/realm";

    #[tokio::test]
    async fn replacement_unmaps_old_role_first() {
        let transport = RecordingTransport::new()
            .on("GET", MAPPINGS, Reply::Json(json!([{"id": "r-1", "name": "viewer"}])))
            .on(
                "GET",
                &format!("{MAPPINGS}/available"),
                Reply::Json(json!([{"id": "r-2", "name": "editor"}])),
            );
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let mut desired = DesiredUserRoleMapping::new("acme", "u-1", RoleScope::Realm, "editor");
        desired.replaces = Some("viewer".to_string());

        let outcome = reconciler.run(Operation::Update, &desired).await.unwrap();

        let mutations = reconciler.session().transport().mutations();
        let verbs: Vec<_> = mutations.iter().map(|call| call.verb).collect();
        assert_eq!(verbs, ["DELETE", "POST"]);
        assert_eq!(mutations[0].body, Some(json!([{"id": "r-1", "name": "viewer"}])));
        assert!(outcome.state().is_some_and(|role| role.matches("r-2")));
    }

    #[tokio::test]
    async fn unchanged_mapping_update_only_reads() {
        let transport = RecordingTransport::new()
            .on("GET", MAPPINGS, Reply::Json(json!([{"id": "r-1", "name": "viewer"}])));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredUserRoleMapping::new("acme", "u-1", RoleScope::Realm, "viewer");

        reconciler.run(Operation::Update, &desired).await.unwrap();

        assert!(reconciler.session().transport().mutations().is_empty());
    }

    #[tokio::test]
    async fn read_of_unmapped_role_is_not_found() {
        let transport = RecordingTransport::new().on("GET", MAPPINGS, Reply::Json(json!([])));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredUserRoleMapping::new("acme", "u-1", RoleScope::Realm, "viewer");

        let err = reconciler.run(Operation::Read, &desired).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
