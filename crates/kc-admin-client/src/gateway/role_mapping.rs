//! User role mapping gateway.
//!
//! Mappings are addressed by user and scope (realm roles, or the roles of
//! one client). The server wants whole role records in the body, so names
//! are resolved against the role lists it serves before any mutation.

use crate::error::{AdminError, AdminResult};
use crate::representation::{RoleRepresentation, RoleScope};
use crate::session::Session;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy)]
enum Listing {
    Assigned,
    Available,
    Effective,
}

/// Role mappings of users.
#[derive(Debug)]
pub struct RoleMappingGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> RoleMappingGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, listing: Listing, realm: &str, user: &str, scope: &RoleScope) -> String {
        let endpoints = self.session.endpoints();
        match scope.client() {
            None => {
                let template = match listing {
                    Listing::Assigned => &endpoints.realm_role_mappings,
                    Listing::Available => &endpoints.available_realm_role_mappings,
                    Listing::Effective => &endpoints.effective_realm_role_mappings,
                };
                self.session
                    .address(template, &[("realm", realm), ("user", user)])
            }
            Some(client) => {
                let template = match listing {
                    Listing::Assigned => &endpoints.client_role_mappings,
                    Listing::Available => &endpoints.available_client_role_mappings,
                    Listing::Effective => &endpoints.effective_client_role_mappings,
                };
                self.session.address(
                    template,
                    &[("realm", realm), ("user", user), ("client", client)],
                )
            }
        }
    }

    async fn list(
        &self,
        listing: Listing,
        realm: &str,
        user: &str,
        scope: &RoleScope,
    ) -> AdminResult<Vec<RoleRepresentation>> {
        self.session
            .fetch(&self.address(listing, realm, user, scope))
            .await
    }

    /// Roles in `scope` that could still be mapped to `user`.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn available(
        &self,
        realm: &str,
        user: &str,
        scope: &RoleScope,
    ) -> AdminResult<Vec<RoleRepresentation>> {
        self.list(Listing::Available, realm, user, scope).await
    }

    /// Roles in `scope` that `user` holds, directly or through composites
    /// and groups.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn effective(
        &self,
        realm: &str,
        user: &str,
        scope: &RoleScope,
    ) -> AdminResult<Vec<RoleRepresentation>> {
        self.list(Listing::Effective, realm, user, scope).await
    }

    /// Roles in `scope` mapped directly to `user`.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn assigned(
        &self,
        realm: &str,
        user: &str,
        scope: &RoleScope,
    ) -> AdminResult<Vec<RoleRepresentation>> {
        self.list(Listing::Assigned, realm, user, scope).await
    }

    /// Maps the role named (or identified) by `role` to `user` and returns
    /// the resolved role.
    ///
    /// ## Errors
    ///
    /// `NotFound` when no available role matches, otherwise any transport
    /// failure.
    pub async fn add(
        &self,
        realm: &str,
        user: &str,
        scope: &RoleScope,
        role: &str,
    ) -> AdminResult<RoleRepresentation> {
        let available = self.available(realm, user, scope).await?;
        let resolved = find_role(&available, role)?.clone();
        let address = self.address(Listing::Assigned, realm, user, scope);
        self.session
            .create(&address, &[&resolved])
            .await
            .map(|_| resolved)
    }

    /// Unmaps the role named (or identified) by `role` from `user` and
    /// returns the resolved role.
    ///
    /// ## Errors
    ///
    /// `NotFound` when no directly mapped role matches, otherwise any
    /// transport failure.
    pub async fn remove(
        &self,
        realm: &str,
        user: &str,
        scope: &RoleScope,
        role: &str,
    ) -> AdminResult<RoleRepresentation> {
        let assigned = self.assigned(realm, user, scope).await?;
        let resolved = find_role(&assigned, role)?.clone();
        let address = self.address(Listing::Assigned, realm, user, scope);
        self.session
            .remove(&address, Some(&[&resolved]))
            .await
            .map(|()| resolved)
    }
}

/// First role in `roles` whose name or id equals `identifier`.
///
/// ## Errors
///
/// `NotFound` when nothing matches.
pub fn find_role<'r>(
    roles: &'r [RoleRepresentation],
    identifier: &str,
) -> AdminResult<&'r RoleRepresentation> {
    roles
        .iter()
        .find(|role| role.matches(identifier))
        .ok_or_else(|| AdminError::not_found("role", identifier))
}
