use async_trait::async_trait;
use kc_admin_client::{AdminResult, RealmRepresentation, Session, Transport};

use crate::driver::Resource;

/// A realm's top-level settings, keyed by realm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredRealm {
    /// Desired settings.
    pub realm: RealmRepresentation,
}

impl DesiredRealm {
    /// Wraps desired settings.
    #[must_use]
    pub const fn new(realm: RealmRepresentation) -> Self {
        Self { realm }
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredRealm {
    type State = RealmRepresentation;

    fn kind(&self) -> &'static str {
        "realm"
    }

    fn key(&self) -> String {
        self.realm.realm.clone()
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<RealmRepresentation> {
        session.realms().create(&self.realm).await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<RealmRepresentation> {
        session.realms().get(&self.realm.realm).await
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<RealmRepresentation> {
        let realms = session.realms();
        realms.update(&self.realm).await?;
        realms.get(&self.realm.realm).await
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        session.realms().delete(&self.realm.realm).await
    }
}
