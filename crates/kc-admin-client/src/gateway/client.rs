//! Client gateway.

use crate::error::AdminResult;
use crate::representation::{ClientRepresentation, ClientSecret, UserRepresentation};
use crate::session::Session;
use crate::transport::Transport;

use super::required_id;

/// Clients, addressed by server id.
#[derive(Debug)]
pub struct ClientGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> ClientGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, template: &str, realm: &str, id: &str) -> String {
        self.session
            .address(template, &[("realm", realm), ("id", id)])
    }

    /// Gets a client by server id.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn get(&self, realm: &str, id: &str) -> AdminResult<ClientRepresentation> {
        let address = self.address(&self.session.endpoints().client, realm, id);
        self.session.fetch(&address).await
    }

    /// Registers a client and returns the server's copy, id included.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure, or `MissingLocation`.
    pub async fn create(
        &self,
        realm: &str,
        client: &ClientRepresentation,
    ) -> AdminResult<ClientRepresentation> {
        let address = self
            .session
            .address(&self.session.endpoints().clients, &[("realm", realm)]);
        self.session.create_and_fetch(&address, client).await
    }

    /// Replaces a client. The record must carry its server id.
    ///
    /// ## Errors
    ///
    /// `Validation` without an id, otherwise any transport failure.
    pub async fn update(&self, realm: &str, client: &ClientRepresentation) -> AdminResult<()> {
        let id = required_id(&client.id, "client")?;
        let address = self.address(&self.session.endpoints().client, realm, id);
        self.session.replace(&address, Some(client)).await
    }

    /// Deletes a client.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn delete(&self, realm: &str, id: &str) -> AdminResult<()> {
        let address = self.address(&self.session.endpoints().client, realm, id);
        self.session.remove::<()>(&address, None).await
    }

    /// Current secret of a confidential client.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn secret(&self, realm: &str, id: &str) -> AdminResult<ClientSecret> {
        let address = self.address(&self.session.endpoints().client_secret, realm, id);
        self.session.fetch(&address).await
    }

    /// User backing a client with service accounts enabled.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn service_account_user(
        &self,
        realm: &str,
        id: &str,
    ) -> AdminResult<UserRepresentation> {
        let address = self.address(
            &self.session.endpoints().client_service_account_user,
            realm,
            id,
        );
        self.session.fetch(&address).await
    }
}
