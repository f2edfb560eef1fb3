//! # kc-reconcile
//!
//! Converges Keycloak entities to a desired state.
//!
//! - [`delta`] - order-insensitive set reconciliation
//! - [`driver`] - the create/read/update/delete state machine
//! - [`resource`] - one desired-state type per entity kind
//! - [`provider`] - the host boundary and the sequential [`drive`] loop
//!
//! Relationship sets are converged by removing before adding, and every
//! mutating step ends by re-reading the server's copy, which is what the
//! host should store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod delta;
pub mod driver;
pub mod provider;
pub mod resource;

pub use delta::{prefer_stored_order, reconcile, same_members, SetDelta};
pub use driver::{Operation, Outcome, Reconciler, Resource};
pub use provider::{drive, DesiredStateProvider, Request, StateOf};
pub use resource::{
    ClientRoleState, DesiredClient, DesiredClientRole, DesiredGroup, DesiredGroupMembership,
    DesiredRealm, DesiredUser, DesiredUserRoleMapping, ObservedClient,
};
