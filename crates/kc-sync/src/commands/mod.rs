//! Command implementations.

pub mod client;
pub mod config;
pub mod group;
pub mod realm;
pub mod role;
pub mod status;
pub mod user;
pub mod user_role;

pub use client::run_client;
pub use config::run_config;
pub use group::run_group;
pub use realm::run_realm;
pub use role::run_role;
pub use status::run_status;
pub use user::run_user;
pub use user_role::run_user_role;

use std::time::Duration;

use kc_admin_client::{login, Endpoints, Session, SessionConfig};

use crate::config::{OutputFormat, DEFAULT_AUTH_REALM};
use crate::{Cli, CliConfig, CliError, CliResult};

/// Settings resolved from flags, environment and the config file.
#[derive(Debug, Clone)]
pub struct Context {
    /// Server URL.
    pub server_url: String,
    /// Realm to log in to.
    pub auth_realm: String,
    /// Realm operated on when a command names none.
    pub default_realm: Option<String>,
    /// Client ID used to log in.
    pub client_id: Option<String>,
    /// Client secret used to log in.
    pub client_secret: Option<String>,
    /// Context path in front of every address.
    pub context_path: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Output format.
    pub output: OutputFormat,
}

impl Context {
    /// Resolves settings, flags first, then the config file.
    #[must_use]
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        let auth = config.auth.as_ref();
        Self {
            server_url: cli
                .server
                .clone()
                .unwrap_or_else(|| config.server_url.clone()),
            auth_realm: cli
                .realm
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTH_REALM.to_string()),
            default_realm: config.default_realm.clone(),
            client_id: cli
                .client_id
                .clone()
                .or_else(|| auth.map(|a| a.client_id.clone()))
                .filter(|id| !id.is_empty()),
            client_secret: cli
                .client_secret
                .clone()
                .or_else(|| auth.and_then(|a| a.client_secret.clone())),
            context_path: cli
                .context_path
                .clone()
                .unwrap_or_else(|| config.context_path.clone()),
            timeout: Duration::from_secs(config.timeout_secs),
            output: cli.output.unwrap_or(config.output_format),
        }
    }

    /// Realm a command operates on: its own flag, then the configured
    /// default, then the login realm.
    #[must_use]
    pub fn realm(&self, arg: Option<&str>) -> String {
        arg.map(str::to_string)
            .or_else(|| self.default_realm.clone())
            .unwrap_or_else(|| self.auth_realm.clone())
    }

    /// Session parameters for [`login`].
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(&self.server_url, &self.auth_realm)
            .with_endpoints(Endpoints::with_context_path(&self.context_path))
            .with_timeout(self.timeout)
    }

    /// Logs in with the resolved client credentials.
    pub async fn connect(&self) -> CliResult<Session> {
        let client_id = self.client_id.as_deref().ok_or_else(|| {
            CliError::Config(
                "client id is required; set KEYCLOAK_CLIENT_ID or run `kc-sync config set client_id`"
                    .to_string(),
            )
        })?;
        let client_secret = self.client_secret.as_deref().ok_or_else(|| {
            CliError::Config(
                "client secret is required; set KEYCLOAK_CLIENT_SECRET".to_string(),
            )
        })?;

        Ok(login(self.session_config(), client_id, client_secret).await?)
    }
}

/// Asks before deleting unless `force` is set. Returns whether to go on.
fn confirm_delete(what: &str, force: bool) -> CliResult<bool> {
    if force || crate::output::confirm(&format!("Are you sure you want to delete {what}?"))? {
        Ok(true)
    } else {
        crate::output::error("Operation cancelled");
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::AuthConfig;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["kc-sync"];
        argv.extend_from_slice(args);
        argv.push("status");
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let config = CliConfig {
            auth: Some(AuthConfig {
                client_id: "from-file".to_string(),
                client_secret: Some("file-secret".to_string()),
            }),
            ..CliConfig::default()
        };
        let cli = parse(&["--server", "https://sso.test", "--client-id", "from-flag"]);

        let context = Context::resolve(&cli, &config);

        assert_eq!(context.server_url, "https://sso.test");
        assert_eq!(context.client_id.as_deref(), Some("from-flag"));
        assert_eq!(context.client_secret.as_deref(), Some("file-secret"));
        assert_eq!(context.timeout, Duration::from_secs(30));
    }

    #[test]
    fn target_realm_falls_back_to_login_realm() {
        let cli = parse(&["--realm", "ops"]);
        let mut config = CliConfig::default();

        let context = Context::resolve(&cli, &config);
        assert_eq!(context.realm(None), "ops");
        assert_eq!(context.realm(Some("acme")), "acme");

        config.default_realm = Some("acme".to_string());
        let context = Context::resolve(&cli, &config);
        assert_eq!(context.realm(None), "acme");
    }

    #[test]
    fn context_path_shapes_session_endpoints() {
        let cli = parse(&["--context-path", ""]);
        let context = Context::resolve(&cli, &CliConfig::default());

        let session = context.session_config();
        assert_eq!(session.endpoints, Endpoints::with_context_path(""));
    }

    fn offline_context(client_id: Option<&str>, client_secret: Option<&str>) -> Context {
        Context {
            server_url: "http://127.0.0.1:9".to_string(),
            auth_realm: DEFAULT_AUTH_REALM.to_string(),
            default_realm: None,
            client_id: client_id.map(str::to_string),
            client_secret: client_secret.map(str::to_string),
            context_path: String::new(),
            timeout: Duration::from_secs(1),
            output: OutputFormat::Quiet,
        }
    }

    #[tokio::test]
    async fn connect_requires_client_id() {
        let err = offline_context(None, Some("s3cr3t")).connect().await.unwrap_err();

        assert!(matches!(err, CliError::Config(ref message) if message.contains("client id")));
    }

    #[tokio::test]
    async fn connect_requires_client_secret() {
        let err = offline_context(Some("kc-sync"), None).connect().await.unwrap_err();

        assert!(matches!(err, CliError::Config(ref message) if message.contains("client secret")));
    }
}
