//! Entity gateways.
//!
//! One gateway per entity kind, each translating entity-shaped calls into
//! addresses and transport operations. Creates are two-step: the entity is
//! posted, then the returned location is fetched and that copy is returned.
//! Updates resend the complete record; the protocol has no partial update.
//!
//! Gateways borrow the [`Session`] they were obtained from:
//!
//! ```rust,ignore
//! let role = session.client_roles().get("acme", &client_id, "viewer").await?;
//! ```

pub mod client;
pub mod composite;
pub mod group;
pub mod membership;
pub mod realm;
pub mod role;
pub mod role_mapping;
pub mod user;

pub use client::ClientGateway;
pub use composite::CompositeGateway;
pub use group::GroupGateway;
pub use membership::{MembershipGateway, MEMBER_PAGE_SIZE};
pub use realm::RealmGateway;
pub use role::ClientRoleGateway;
pub use role_mapping::{find_role, RoleMappingGateway};
pub use user::UserGateway;

use crate::error::{AdminError, AdminResult};
use crate::representation::Field;
use crate::session::Session;
use crate::transport::Transport;

impl<T: Transport> Session<T> {
    /// Realm gateway.
    #[must_use]
    pub const fn realms(&self) -> RealmGateway<'_, T> {
        RealmGateway::new(self)
    }

    /// Client gateway.
    #[must_use]
    pub const fn clients(&self) -> ClientGateway<'_, T> {
        ClientGateway::new(self)
    }

    /// Client role gateway.
    #[must_use]
    pub const fn client_roles(&self) -> ClientRoleGateway<'_, T> {
        ClientRoleGateway::new(self)
    }

    /// Composite role gateway.
    #[must_use]
    pub const fn composites(&self) -> CompositeGateway<'_, T> {
        CompositeGateway::new(self)
    }

    /// User gateway.
    #[must_use]
    pub const fn users(&self) -> UserGateway<'_, T> {
        UserGateway::new(self)
    }

    /// Group gateway.
    #[must_use]
    pub const fn groups(&self) -> GroupGateway<'_, T> {
        GroupGateway::new(self)
    }

    /// Group membership gateway.
    #[must_use]
    pub const fn memberships(&self) -> MembershipGateway<'_, T> {
        MembershipGateway::new(self)
    }

    /// User role mapping gateway.
    #[must_use]
    pub const fn role_mappings(&self) -> RoleMappingGateway<'_, T> {
        RoleMappingGateway::new(self)
    }
}

/// Server id of a record that must already exist.
pub(crate) fn required_id<'a>(id: &'a Field<String>, kind: &str) -> AdminResult<&'a str> {
    match id.value() {
        Some(id) if !id.is_empty() => Ok(id.as_str()),
        _ => Err(AdminError::validation(format!("{kind} id is required"))),
    }
}
