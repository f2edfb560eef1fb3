//! User commands.

use crate::cli::UserCommand;
use crate::output::{output_single, success};

use super::{confirm_delete, Context};

/// Runs a user command.
pub async fn run_user(cmd: UserCommand, context: &Context) -> crate::CliResult<()> {
    let session = context.connect().await?;

    match cmd {
        UserCommand::Get { id, realm } => {
            let realm = context.realm(realm.as_deref());
            let user = session.users().get(&realm, &id).await?;
            output_single(&user, context.output)
        }
        UserCommand::Delete { id, realm, force } => {
            let realm = context.realm(realm.as_deref());
            if !confirm_delete(&format!("user '{id}'"), force)? {
                return Ok(());
            }
            session.users().delete(&realm, &id).await?;
            success(&format!("User '{id}' deleted successfully"));
            Ok(())
        }
    }
}
