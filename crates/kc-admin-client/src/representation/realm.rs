//! Realm representation.
//!
//! Only top-level realm keys are modelled; Keycloak ignores nested keys on
//! realm updates.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Field;
use crate::error::{AdminError, AdminResult};

/// SSL requirement level for a realm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslRequired {
    /// SSL required for all requests.
    All,
    /// SSL required for external requests only.
    #[default]
    External,
    /// No SSL required.
    None,
}

impl SslRequired {
    /// Wire value of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::External => "external",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SslRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslRequired {
    type Err = AdminError;

    fn from_str(s: &str) -> AdminResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "external" => Ok(Self::External),
            "none" => Ok(Self::None),
            _ => Err(AdminError::validation(format!(
                "invalid value for ssl_required: '{s}' (valid are all, external or none)"
            ))),
        }
    }
}

/// SMTP server settings.
///
/// The accepted keys are not part of the documented admin API (the server
/// reads them as Java properties), so they stay an untyped string map.
/// `host` and `from` are required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmtpSettings(pub BTreeMap<String, String>);

impl SmtpSettings {
    const REQUIRED_KEYS: [&'static str; 2] = ["host", "from"];

    /// Builds settings from the SMTP blocks a realm declares.
    ///
    /// Zero blocks leave the realm's SMTP configuration untouched; more than
    /// one is rejected.
    ///
    /// ## Errors
    ///
    /// Returns `AdminError::Validation` for more than one block or a block
    /// missing a required key.
    pub fn from_blocks(blocks: Vec<BTreeMap<String, String>>) -> AdminResult<Field<Self>> {
        if blocks.len() > 1 {
            return Err(AdminError::validation(
                "only one SMTP server can be defined per realm",
            ));
        }

        match blocks.into_iter().next() {
            None => Ok(Field::Unset),
            Some(block) => {
                let settings = Self(block);
                settings.validate()?;
                Ok(Field::Value(settings))
            }
        }
    }

    /// Checks that the required keys are present and non-empty.
    ///
    /// ## Errors
    ///
    /// Returns `AdminError::Validation` naming the first missing key.
    pub fn validate(&self) -> AdminResult<()> {
        for key in Self::REQUIRED_KEYS {
            if self.get(key).map_or(true, str::is_empty) {
                return Err(AdminError::validation(format!(
                    "SMTP server setting '{key}' is required"
                )));
            }
        }
        Ok(())
    }

    /// Whether no setting is present, as in the server's default `{}`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// A realm as exchanged with the admin API.
///
/// The realm name doubles as its identifier in every address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmRepresentation {
    /// Server-side id; equal to the realm name on current servers.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Realm name.
    pub realm: String,
    /// Whether the realm is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// SSL requirement level.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ssl_required: Field<SslRequired>,
    /// Display name for UI.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub display_name: Field<String>,
    /// Locales offered on the login pages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_locales: Vec<String>,
    /// Roles granted to every new user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_roles: Vec<String>,
    /// SMTP server settings.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub smtp_server: Field<SmtpSettings>,

    /// Login page theme.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub login_theme: Field<String>,
    /// Account console theme.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub account_theme: Field<String>,
    /// Admin console theme.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub admin_theme: Field<String>,
    /// Email template theme.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_theme: Field<String>,

    /// Enable internationalization.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub internationalization_enabled: Field<bool>,
    /// Allow user self-registration.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub registration_allowed: Field<bool>,
    /// Use email as username during registration.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub registration_email_as_username: Field<bool>,
    /// Enable "Remember Me" checkbox.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remember_me: Field<bool>,
    /// Require email verification.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub verify_email: Field<bool>,
    /// Allow password reset.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reset_password_allowed: Field<bool>,
    /// Allow users to edit their username.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub edit_username_allowed: Field<bool>,
    /// Enable brute force detection.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub brute_force_protected: Field<bool>,

    // Token and session lifespans, in seconds
    /// Access token lifespan.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub access_token_lifespan: Field<i32>,
    /// Access token lifespan for the implicit flow.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub access_token_lifespan_for_implicit_flow: Field<i32>,
    /// SSO session idle timeout.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sso_session_idle_timeout: Field<i32>,
    /// SSO session max lifespan.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sso_session_max_lifespan: Field<i32>,
    /// Offline session idle timeout.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub offline_session_idle_timeout: Field<i32>,
    /// Authorization code lifespan.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub access_code_lifespan: Field<i32>,
    /// User action code lifespan.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub access_code_lifespan_user_action: Field<i32>,
    /// Login flow code lifespan.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub access_code_lifespan_login: Field<i32>,

    // Brute force detection knobs
    /// Maximum lockout wait.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_failure_wait_seconds: Field<i32>,
    /// Lockout after a too-quick login failure.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub minimum_quick_login_wait_seconds: Field<i32>,
    /// Lockout increment per failure.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub wait_increment_seconds: Field<i32>,
    /// Window that counts as a quick login failure.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quick_login_check_milli_seconds: Field<i32>,
    /// Time after which the failure count resets.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_delta_time_seconds: Field<i32>,
    /// Failures before lockout.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub failure_factor: Field<i32>,
}

impl RealmRepresentation {
    /// Creates an enabled realm with every optional setting unset.
    #[must_use]
    pub fn new(realm: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            enabled: true,
            ..Default::default()
        }
    }

    /// Sets the SSL requirement from its textual form.
    ///
    /// ## Errors
    ///
    /// Returns `AdminError::Validation` for values outside all/external/none.
    pub fn with_ssl_required(mut self, value: &str) -> AdminResult<Self> {
        self.ssl_required = Field::Value(value.parse()?);
        Ok(self)
    }

    /// Checks what can be checked locally before sending the realm.
    ///
    /// ## Errors
    ///
    /// Returns `AdminError::Validation` for an empty realm name or incomplete
    /// SMTP settings.
    pub fn validate(&self) -> AdminResult<()> {
        if self.realm.trim().is_empty() {
            return Err(AdminError::validation("realm name must not be empty"));
        }
        // An empty block means "not configured" and round-trips as is.
        if let Field::Value(smtp) = &self.smtp_server {
            if !smtp.is_empty() {
                smtp.validate()?;
            }
        }
        Ok(())
    }
}
