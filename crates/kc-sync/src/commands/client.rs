//! Client commands.

use kc_admin_client::{ClientRepresentation, Field};
use kc_reconcile::{DesiredClient, Operation, Reconciler};
use serde::Serialize;

use crate::cli::ClientCommand;
use crate::config::OutputFormat;
use crate::output::{output_single, success};

use super::{confirm_delete, Context};

/// A client together with its derived credentials.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientView {
    #[serde(flatten)]
    client: ClientRepresentation,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_account_user_id: Option<String>,
}

/// Runs a client command.
pub async fn run_client(cmd: ClientCommand, context: &Context) -> crate::CliResult<()> {
    let session = context.connect().await?;

    match cmd {
        ClientCommand::Get { id, realm } => {
            let realm = context.realm(realm.as_deref());
            let mut client = ClientRepresentation::default();
            client.id = Field::Value(id);

            let reconciler = Reconciler::new(session);
            let observed = reconciler
                .run(Operation::Read, &DesiredClient::new(realm, client))
                .await?
                .into_state();
            if let Some(observed) = observed {
                let view = ClientView {
                    client: observed.client,
                    secret: observed.secret,
                    service_account_user_id: observed.service_account_user_id,
                };
                output_single(&view, context.output)?;
            }
            Ok(())
        }
        ClientCommand::Secret { id, realm } => {
            let realm = context.realm(realm.as_deref());
            let secret = session.clients().secret(&realm, &id).await?;
            match context.output {
                OutputFormat::Table => println!("{}", secret.value),
                format => output_single(&secret, format)?,
            }
            Ok(())
        }
        ClientCommand::Delete { id, realm, force } => {
            let realm = context.realm(realm.as_deref());
            if !confirm_delete(&format!("client '{id}'"), force)? {
                return Ok(());
            }
            session.clients().delete(&realm, &id).await?;
            success(&format!("Client '{id}' deleted successfully"));
            Ok(())
        }
    }
}
