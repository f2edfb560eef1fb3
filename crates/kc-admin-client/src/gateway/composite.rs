//! Composite role gateway.
//!
//! A composite role grants the roles it references. References are kept by
//! role id; callers resolve names first.

use std::collections::BTreeSet;

use crate::error::AdminResult;
use crate::representation::{RoleReference, RoleRepresentation};
use crate::session::Session;
use crate::transport::Transport;

/// Composites of one client role.
#[derive(Debug)]
pub struct CompositeGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> CompositeGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn address(&self, realm: &str, client: &str, role: &str) -> String {
        self.session.address(
            &self.session.endpoints().client_role_composites,
            &[("realm", realm), ("client", client), ("role", role)],
        )
    }

    /// Ids of the roles `role` currently references.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn list(&self, realm: &str, client: &str, role: &str) -> AdminResult<BTreeSet<String>> {
        let roles: Vec<RoleRepresentation> =
            self.session.fetch(&self.address(realm, client, role)).await?;
        Ok(roles
            .into_iter()
            .filter_map(|role| role.id.into_option())
            .collect())
    }

    /// Adds references to the roles with `ids`. A no-op for an empty set.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn add(
        &self,
        realm: &str,
        client: &str,
        role: &str,
        ids: &BTreeSet<String>,
    ) -> AdminResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let body = references(ids);
        self.session
            .create(&self.address(realm, client, role), &body)
            .await
            .map(drop)
    }

    /// Removes references to the roles with `ids`. A no-op for an empty set.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn remove(
        &self,
        realm: &str,
        client: &str,
        role: &str,
        ids: &BTreeSet<String>,
    ) -> AdminResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let body = references(ids);
        self.session
            .remove(&self.address(realm, client, role), Some(&body))
            .await
    }
}

fn references(ids: &BTreeSet<String>) -> Vec<RoleReference> {
    ids.iter().map(RoleReference::new).collect()
}
