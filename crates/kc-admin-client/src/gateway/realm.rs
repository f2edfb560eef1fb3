//! Realm gateway.

use crate::error::AdminResult;
use crate::representation::RealmRepresentation;
use crate::session::Session;
use crate::transport::Transport;

/// Realms, addressed by name.
#[derive(Debug)]
pub struct RealmGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> RealmGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, name: &str) -> String {
        let endpoints = self.session.endpoints();
        self.session.address(&endpoints.realm, &[("realm", name)])
    }

    /// Gets a realm by name.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn get(&self, name: &str) -> AdminResult<RealmRepresentation> {
        self.session.fetch(&self.address(name)).await
    }

    /// Imports a realm and returns the server's copy of it.
    ///
    /// ## Errors
    ///
    /// `Validation` before any request for an invalid realm, otherwise any
    /// transport or decode failure.
    pub async fn create(&self, realm: &RealmRepresentation) -> AdminResult<RealmRepresentation> {
        realm.validate()?;
        let endpoints = self.session.endpoints();
        let address = self.session.address(&endpoints.realms, &[]);
        self.session.create_and_fetch(&address, realm).await
    }

    /// Replaces a realm's top-level settings.
    ///
    /// ## Errors
    ///
    /// `Validation` before any request for an invalid realm, otherwise any
    /// transport failure.
    pub async fn update(&self, realm: &RealmRepresentation) -> AdminResult<()> {
        realm.validate()?;
        self.session
            .replace(&self.address(&realm.realm), Some(realm))
            .await
    }

    /// Deletes a realm and everything in it.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn delete(&self, name: &str) -> AdminResult<()> {
        self.session.remove::<()>(&self.address(name), None).await
    }
}
