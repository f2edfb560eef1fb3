use async_trait::async_trait;
use kc_admin_client::{AdminResult, GroupRepresentation, Session, Transport};

use super::existing_id;
use crate::driver::Resource;

/// A top-level group, keyed by server id once created.
///
/// Deleting a group leaves member links to the server's cascade; converge
/// them through [`crate::DesiredGroupMembership`] when that matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredGroup {
    /// Realm name.
    pub realm: String,
    /// Desired record.
    pub group: GroupRepresentation,
}

impl DesiredGroup {
    /// Wraps a desired group record.
    #[must_use]
    pub fn new(realm: impl Into<String>, group: GroupRepresentation) -> Self {
        Self {
            realm: realm.into(),
            group,
        }
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredGroup {
    type State = GroupRepresentation;

    fn kind(&self) -> &'static str {
        "group"
    }

    fn key(&self) -> String {
        format!("{}/{}", self.realm, self.group.name)
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<GroupRepresentation> {
        session.groups().create(&self.realm, &self.group).await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<GroupRepresentation> {
        let id = existing_id(&self.group.id, "group")?;
        session.groups().get(&self.realm, id).await
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<GroupRepresentation> {
        let id = existing_id(&self.group.id, "group")?;
        let groups = session.groups();
        groups.update(&self.realm, &self.group).await?;
        groups.get(&self.realm, id).await
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        let id = existing_id(&self.group.id, "group")?;
        session.groups().delete(&self.realm, id).await
    }
}
