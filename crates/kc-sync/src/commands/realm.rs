//! Realm commands.

use crate::cli::RealmCommand;
use crate::output::{output_single, success};

use super::{confirm_delete, Context};

/// Runs a realm command.
pub async fn run_realm(cmd: RealmCommand, context: &Context) -> crate::CliResult<()> {
    let session = context.connect().await?;

    match cmd {
        RealmCommand::Get { name } => {
            let realm = session.realms().get(&name).await?;
            output_single(&realm, context.output)
        }
        RealmCommand::Delete { name, force } => {
            if !confirm_delete(&format!("realm '{name}'"), force)? {
                return Ok(());
            }
            session.realms().delete(&name).await?;
            success(&format!("Realm '{name}' deleted successfully"));
            Ok(())
        }
    }
}
