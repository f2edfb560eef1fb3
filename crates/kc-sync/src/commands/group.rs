//! Group commands.

use std::collections::BTreeSet;

use kc_reconcile::{DesiredGroupMembership, Operation, Reconciler};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::GroupCommand;
use crate::output::{info, output, output_single, success};

use super::{confirm_delete, Context};

/// Group member, for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct GroupMemberDisplay {
    /// User ID.
    pub id: String,
}

fn rows(members: BTreeSet<String>) -> Vec<GroupMemberDisplay> {
    members
        .into_iter()
        .map(|id| GroupMemberDisplay { id })
        .collect()
}

/// Runs a group command.
pub async fn run_group(cmd: GroupCommand, context: &Context) -> crate::CliResult<()> {
    let session = context.connect().await?;

    match cmd {
        GroupCommand::Get { id, realm } => {
            let realm = context.realm(realm.as_deref());
            let group = session.groups().get(&realm, &id).await?;
            output_single(&group, context.output)
        }
        GroupCommand::Members { id, realm } => {
            let realm = context.realm(realm.as_deref());
            let members = session.memberships().members(&realm, &id).await?;
            output(&rows(members), context.output)
        }
        GroupCommand::SyncMembers { id, members, realm } => {
            let realm = context.realm(realm.as_deref());
            let desired = DesiredGroupMembership::new(realm, id.as_str(), members);

            let outcome = Reconciler::new(session)
                .run(Operation::Update, &desired)
                .await?;
            if let Some(members) = outcome.into_state() {
                info(&format!("Group '{id}' has {} member(s)", members.len()));
                output(&rows(members), context.output)?;
            }
            success(&format!("Members of group '{id}' are in sync"));
            Ok(())
        }
        GroupCommand::Delete { id, realm, force } => {
            let realm = context.realm(realm.as_deref());
            if !confirm_delete(&format!("group '{id}'"), force)? {
                return Ok(());
            }
            session.groups().delete(&realm, &id).await?;
            success(&format!("Group '{id}' deleted successfully"));
            Ok(())
        }
    }
}
