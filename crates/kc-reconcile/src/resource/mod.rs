//! Desired-state resources, one per entity kind.

mod client;
mod client_role;
mod group;
mod membership;
mod realm;
mod role_mapping;
mod user;

pub use client::{DesiredClient, ObservedClient};
pub use client_role::{ClientRoleState, DesiredClientRole};
pub use group::DesiredGroup;
pub use membership::DesiredGroupMembership;
pub use realm::DesiredRealm;
pub use role_mapping::DesiredUserRoleMapping;
pub use user::DesiredUser;

use kc_admin_client::{AdminResult, Field};

/// Server id of an entity that must already exist.
fn existing_id<'a>(id: &'a Field<String>, kind: &str) -> AdminResult<&'a str> {
    match id.value() {
        Some(id) if !id.is_empty() => Ok(id.as_str()),
        _ => Err(kc_admin_client::AdminError::validation(format!(
            "{kind} id is required"
        ))),
    }
}
