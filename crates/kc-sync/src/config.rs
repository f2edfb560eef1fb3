//! CLI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Realm to authenticate against when nothing else says otherwise.
pub const DEFAULT_AUTH_REALM: &str = "master";

/// CLI configuration, stored at `~/.keycloak/kc-sync.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server URL (e.g., http://localhost:8080).
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Realm operated on when a command names none.
    pub default_realm: Option<String>,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Context path in front of every address (`/auth` before Keycloak 17).
    #[serde(default = "default_context_path")]
    pub context_path: String,

    /// Client credentials.
    pub auth: Option<AuthConfig>,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_context_path() -> String {
    kc_admin_client::LEGACY_CONTEXT_PATH.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_realm: None,
            output_format: OutputFormat::default(),
            timeout_secs: default_timeout_secs(),
            context_path: default_context_path(),
            auth: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from file.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration file content.
    pub fn parse(content: &str) -> crate::CliResult<Self> {
        toml::from_str(content)
            .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".keycloak").join("kc-sync.toml"))
    }

    /// Sets one value by key, as `config set` does.
    pub fn set(&mut self, key: &str, value: &str) -> crate::CliResult<()> {
        match key {
            "server_url" | "server" => self.server_url = value.to_string(),
            "default_realm" | "realm" => {
                self.default_realm = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "output_format" | "output" => self.output_format = value.parse()?,
            "timeout_secs" | "timeout" => {
                self.timeout_secs = value.parse().map_err(|_| {
                    crate::CliError::InvalidArgument(format!(
                        "timeout must be a whole number of seconds, got '{value}'"
                    ))
                })?;
            }
            "context_path" => self.context_path = value.to_string(),
            "client_id" => self.auth_mut().client_id = value.to_string(),
            "client_secret" => self.auth_mut().client_secret = Some(value.to_string()),
            _ => {
                return Err(crate::CliError::InvalidArgument(format!(
                    "Unknown configuration key: {key}. Known keys: server_url, default_realm, \
                     output_format, timeout_secs, context_path, client_id, client_secret"
                )));
            }
        }
        Ok(())
    }

    fn auth_mut(&mut self) -> &mut AuthConfig {
        self.auth.get_or_insert_with(AuthConfig::default)
    }
}

/// Output format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// Quiet (minimal output).
    Quiet,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "quiet" => Ok(Self::Quiet),
            _ => Err(crate::CliError::InvalidArgument(format!(
                "Unknown output format: {value}. Supported: table, json, quiet"
            ))),
        }
    }
}

/// Client credentials used to log in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Client ID for authentication.
    pub client_id: String,
    /// Client secret.
    pub client_secret: Option<String>,
}
