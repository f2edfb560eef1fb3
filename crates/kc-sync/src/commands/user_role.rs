//! User role mapping commands.

use kc_admin_client::{RoleRepresentation, RoleScope};
use kc_reconcile::{DesiredUserRoleMapping, Operation, Reconciler};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::UserRoleCommand;
use crate::output::{output, success};

use super::Context;

/// Mapped role, for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct MappedRoleDisplay {
    /// Role ID.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Role description.
    pub description: String,
}

impl From<RoleRepresentation> for MappedRoleDisplay {
    fn from(role: RoleRepresentation) -> Self {
        Self {
            id: role.id.into_option().unwrap_or_default(),
            name: role.name,
            description: role.description.into_option().unwrap_or_default(),
        }
    }
}

/// Runs a user role mapping command.
pub async fn run_user_role(cmd: UserRoleCommand, context: &Context) -> crate::CliResult<()> {
    let session = context.connect().await?;

    match cmd {
        UserRoleCommand::List {
            user,
            client,
            effective,
            realm,
        } => {
            let realm = context.realm(realm.as_deref());
            let scope = RoleScope::from_client(client.as_deref());
            let mappings = session.role_mappings();
            let roles = if effective {
                mappings.effective(&realm, &user, &scope).await?
            } else {
                mappings.assigned(&realm, &user, &scope).await?
            };
            let rows: Vec<MappedRoleDisplay> = roles.into_iter().map(Into::into).collect();
            output(&rows, context.output)
        }
        UserRoleCommand::Add {
            user,
            role,
            client,
            realm,
        } => {
            let realm = context.realm(realm.as_deref());
            let scope = RoleScope::from_client(client.as_deref());
            let desired = DesiredUserRoleMapping::new(realm, user.as_str(), scope, role.as_str());
            Reconciler::new(session)
                .run(Operation::Create, &desired)
                .await?;
            success(&format!("Role '{role}' mapped to user '{user}'"));
            Ok(())
        }
        UserRoleCommand::Remove {
            user,
            role,
            client,
            realm,
        } => {
            let realm = context.realm(realm.as_deref());
            let scope = RoleScope::from_client(client.as_deref());
            let desired = DesiredUserRoleMapping::new(realm, user.as_str(), scope, role.as_str());
            Reconciler::new(session)
                .run(Operation::Delete, &desired)
                .await?;
            success(&format!("Role '{role}' unmapped from user '{user}'"));
            Ok(())
        }
    }
}
