//! Group gateway.

use crate::error::AdminResult;
use crate::representation::GroupRepresentation;
use crate::session::Session;
use crate::transport::Transport;

use super::required_id;

/// Top-level groups, addressed by server id.
#[derive(Debug)]
pub struct GroupGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> GroupGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, realm: &str, id: &str) -> String {
        self.session
            .address(&self.session.endpoints().group, &[("realm", realm), ("id", id)])
    }

    /// Gets a group by server id.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn get(&self, realm: &str, id: &str) -> AdminResult<GroupRepresentation> {
        self.session.fetch(&self.address(realm, id)).await
    }

    /// Creates a top-level group and returns the server's copy.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure, or `MissingLocation`.
    pub async fn create(
        &self,
        realm: &str,
        group: &GroupRepresentation,
    ) -> AdminResult<GroupRepresentation> {
        let address = self
            .session
            .address(&self.session.endpoints().groups, &[("realm", realm)]);
        self.session.create_and_fetch(&address, group).await
    }

    /// Replaces a group. The record must carry its server id.
    ///
    /// ## Errors
    ///
    /// `Validation` without an id, otherwise any transport failure.
    pub async fn update(&self, realm: &str, group: &GroupRepresentation) -> AdminResult<()> {
        let id = required_id(&group.id, "group")?;
        self.session
            .replace(&self.address(realm, id), Some(group))
            .await
    }

    /// Deletes a group. Memberships go with it.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn delete(&self, realm: &str, id: &str) -> AdminResult<()> {
        self.session.remove::<()>(&self.address(realm, id), None).await
    }
}
