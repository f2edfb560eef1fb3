//! Client role commands.

use std::collections::BTreeSet;

use kc_admin_client::RoleRepresentation;
use kc_reconcile::{ClientRoleState, DesiredClientRole, Operation, Reconciler};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::RoleCommand;
use crate::output::{info, output, output_single, success};

use super::{confirm_delete, Context};

/// Referenced role, for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CompositeDisplay {
    /// Role ID.
    pub id: String,
}

/// A role with the ids it references.
#[derive(Debug, Serialize)]
struct RoleView {
    #[serde(flatten)]
    role: RoleRepresentation,
    composites: BTreeSet<String>,
}

impl From<ClientRoleState> for RoleView {
    fn from(state: ClientRoleState) -> Self {
        Self {
            role: state.role,
            composites: state.composites,
        }
    }
}

fn rows(ids: BTreeSet<String>) -> Vec<CompositeDisplay> {
    ids.into_iter().map(|id| CompositeDisplay { id }).collect()
}

/// Runs a client role command.
pub async fn run_role(cmd: RoleCommand, context: &Context) -> crate::CliResult<()> {
    let session = context.connect().await?;

    match cmd {
        RoleCommand::Get {
            name,
            client,
            realm,
        } => {
            let realm = context.realm(realm.as_deref());
            let desired = DesiredClientRole::new(realm, client, RoleRepresentation::new(name));
            let outcome = Reconciler::new(session)
                .run(Operation::Read, &desired)
                .await?;
            if let Some(state) = outcome.into_state() {
                output_single(&RoleView::from(state), context.output)?;
            }
            Ok(())
        }
        RoleCommand::Composites {
            name,
            client,
            realm,
        } => {
            let realm = context.realm(realm.as_deref());
            let ids = session.composites().list(&realm, &client, &name).await?;
            output(&rows(ids), context.output)
        }
        RoleCommand::SyncComposites {
            name,
            client,
            composites,
            realm,
        } => {
            let realm = context.realm(realm.as_deref());
            let current = session.client_roles().get(&realm, &client, &name).await?;
            let desired = DesiredClientRole::new(realm, client, current).with_composites(composites);

            let outcome = Reconciler::new(session)
                .run(Operation::Update, &desired)
                .await?;
            if let Some(state) = outcome.into_state() {
                info(&format!("'{name}' references {} role(s)", state.composites.len()));
                output(&rows(state.composites), context.output)?;
            }
            success(&format!("Composites of '{name}' are in sync"));
            Ok(())
        }
        RoleCommand::Delete {
            name,
            client,
            realm,
            force,
        } => {
            let realm = context.realm(realm.as_deref());
            if !confirm_delete(&format!("role '{name}'"), force)? {
                return Ok(());
            }
            session.client_roles().delete(&realm, &client, &name).await?;
            success(&format!("Role '{name}' deleted successfully"));
            Ok(())
        }
    }
}
