//! Status command.

use crate::output::{info, success};

use super::Context;

/// Logs in and reports the realm the session landed in.
pub async fn run_status(context: &Context) -> crate::CliResult<()> {
    info(&format!("Logging in to {}...", context.server_url));

    let session = context.connect().await?;
    let realm = session.realms().get(session.realm()).await?;

    success("Server is reachable and credentials are valid");
    println!();
    println!("Server: {}", session.base_url());
    println!("Realm: {}", realm.realm);
    if let Some(name) = realm.display_name.value() {
        println!("Display name: {name}");
    }
    println!("Enabled: {}", realm.enabled);
    Ok(())
}
