use std::collections::BTreeSet;

use async_trait::async_trait;
use kc_admin_client::{AdminResult, RoleRepresentation, Session, Transport};

use crate::delta::{reconcile, SetDelta};
use crate::driver::Resource;

/// A client role and the roles it references as a composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredClientRole {
    /// Realm name.
    pub realm: String,
    /// Server id of the owning client.
    pub client: String,
    /// Desired role record.
    pub role: RoleRepresentation,
    /// Ids of the roles this role should reference.
    pub composites: BTreeSet<String>,
    /// Name the role is stored under, when an update renames it.
    pub stored_name: Option<String>,
}

/// A client role as observed on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRoleState {
    /// Canonical role record.
    pub role: RoleRepresentation,
    /// Ids of the roles it references.
    pub composites: BTreeSet<String>,
}

impl DesiredClientRole {
    /// Creates a desired role with no composites.
    #[must_use]
    pub fn new(
        realm: impl Into<String>,
        client: impl Into<String>,
        role: RoleRepresentation,
    ) -> Self {
        Self {
            realm: realm.into(),
            client: client.into(),
            role,
            composites: BTreeSet::new(),
            stored_name: None,
        }
    }

    /// Sets the desired composite ids.
    #[must_use]
    pub fn with_composites<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.composites = ids.into_iter().map(Into::into).collect();
        self
    }

    fn stored_name(&self) -> &str {
        self.stored_name.as_deref().unwrap_or(&self.role.name)
    }

    /// Removes then adds, so a role never transiently holds both sets.
    async fn apply<T: Transport>(&self, session: &Session<T>, delta: &SetDelta<String>) -> AdminResult<()> {
        let composites = session.composites();
        let name = &self.role.name;
        composites
            .remove(&self.realm, &self.client, name, &delta.to_remove)
            .await?;
        composites
            .add(&self.realm, &self.client, name, &delta.to_add)
            .await
    }

    async fn observe<T: Transport>(&self, session: &Session<T>) -> AdminResult<ClientRoleState> {
        let name = &self.role.name;
        let role = session
            .client_roles()
            .get(&self.realm, &self.client, name)
            .await?;
        let composites = session
            .composites()
            .list(&self.realm, &self.client, name)
            .await?;
        Ok(ClientRoleState { role, composites })
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredClientRole {
    type State = ClientRoleState;

    fn kind(&self) -> &'static str {
        "client role"
    }

    fn key(&self) -> String {
        format!("{}/{}/{}", self.realm, self.client, self.role.name)
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<ClientRoleState> {
        let role = session
            .client_roles()
            .create(&self.realm, &self.client, &self.role)
            .await?;
        if self.composites.is_empty() {
            return Ok(ClientRoleState {
                role,
                composites: BTreeSet::new(),
            });
        }

        let delta = reconcile(BTreeSet::new(), self.composites.iter().cloned());
        self.apply(session, &delta).await?;
        self.observe(session).await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<ClientRoleState> {
        self.observe(session).await
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<ClientRoleState> {
        session
            .client_roles()
            .update(&self.realm, &self.client, self.stored_name(), &self.role)
            .await?;

        let current = session
            .composites()
            .list(&self.realm, &self.client, &self.role.name)
            .await?;
        let delta = reconcile(current, self.composites.iter().cloned());
        if delta.is_empty() {
            tracing::debug!(role = %self.role.name, "composites already converged");
        } else {
            self.apply(session, &delta).await?;
        }
        self.observe(session).await
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        session
            .client_roles()
            .delete(&self.realm, &self.client, self.stored_name())
            .await
    }
}
