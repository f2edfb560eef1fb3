//! User gateway.

use crate::error::AdminResult;
use crate::representation::UserRepresentation;
use crate::session::Session;
use crate::transport::Transport;

use super::required_id;

/// Users, addressed by server id.
#[derive(Debug)]
pub struct UserGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> UserGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, realm: &str, id: &str) -> String {
        self.session
            .address(&self.session.endpoints().user, &[("realm", realm), ("id", id)])
    }

    /// Gets a user by server id.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn get(&self, realm: &str, id: &str) -> AdminResult<UserRepresentation> {
        self.session.fetch(&self.address(realm, id)).await
    }

    /// Creates a user and returns the server's copy, id included.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure, or `MissingLocation`.
    pub async fn create(
        &self,
        realm: &str,
        user: &UserRepresentation,
    ) -> AdminResult<UserRepresentation> {
        let address = self
            .session
            .address(&self.session.endpoints().users, &[("realm", realm)]);
        self.session.create_and_fetch(&address, user).await
    }

    /// Replaces a user. The record must carry its server id.
    ///
    /// ## Errors
    ///
    /// `Validation` without an id, otherwise any transport failure.
    pub async fn update(&self, realm: &str, user: &UserRepresentation) -> AdminResult<()> {
        let id = required_id(&user.id, "user")?;
        self.session
            .replace(&self.address(realm, id), Some(user))
            .await
    }

    /// Deletes a user.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn delete(&self, realm: &str, id: &str) -> AdminResult<()> {
        self.session.remove::<()>(&self.address(realm, id), None).await
    }
}
