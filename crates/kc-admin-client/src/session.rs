//! Session establishment.
//!
//! A [`Session`] is the explicit handle every gateway call goes through: a
//! transport bound to one bearer token, a base address, a default realm and
//! the endpoint templates. Sessions are plain values, so several isolated
//! sessions can coexist in one process.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::{expand, Endpoints};
use crate::error::{AdminError, AdminResult};
use crate::transport::{HttpTransport, Transport};

/// Default request timeout for sessions established by [`login`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to establish a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server base address (e.g. `https://sso.example.com`).
    pub base_url: String,
    /// Realm to authenticate against; also the session's default realm.
    pub realm: String,
    /// Address templates.
    pub endpoints: Endpoints,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SessionConfig {
    /// Creates a configuration with default templates and timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            realm: realm.into(),
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the endpoint templates.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges client credentials for a bearer token and opens a session.
///
/// One `client_credentials` grant is performed; the token is neither cached
/// nor refreshed.
///
/// ## Errors
///
/// `Authentication` when the token endpoint answers anything but 200,
/// `Decode` when the answer has no access token, `Transport` when the server
/// cannot be reached.
pub async fn login(
    config: SessionConfig,
    client_id: &str,
    client_secret: &str,
) -> AdminResult<Session<HttpTransport>> {
    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let address = expand(
        &config.endpoints.token,
        &config.base_url,
        &[("realm", config.realm.as_str())],
    );

    let response = client
        .post(&address)
        .header(
            header::AUTHORIZATION,
            basic_authorization(client_id, client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    if status != 200 {
        tracing::warn!(client_id, status, "keycloak login failed");
        return Err(AdminError::Authentication { status, body });
    }

    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|source| AdminError::Decode { address, source })?;
    tracing::info!(client_id, realm = %config.realm, "keycloak session established");

    Ok(Session::new(
        HttpTransport::new(client, token.access_token),
        config.base_url,
        config.realm,
    )
    .with_endpoints(config.endpoints))
}

/// Builds an HTTP Basic `Authorization` value from `id:secret`.
#[must_use]
pub fn basic_authorization(id: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{id}:{secret}")))
}

/// An authenticated handle on one server.
#[derive(Debug, Clone)]
pub struct Session<T = HttpTransport> {
    transport: T,
    endpoints: Endpoints,
    base_url: String,
    realm: String,
}

impl<T: Transport> Session<T> {
    /// Wraps an already authenticated transport.
    #[must_use]
    pub fn new(transport: T, base_url: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            transport,
            endpoints: Endpoints::default(),
            base_url: base_url.into(),
            realm: realm.into(),
        }
    }

    /// Replaces the endpoint templates.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Default realm of this session.
    #[must_use]
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Server base address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint templates.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Expands one of this session's templates.
    pub(crate) fn address(&self, template: &str, params: &[(&str, &str)]) -> String {
        expand(template, &self.base_url, params)
    }

    pub(crate) async fn fetch<R: DeserializeOwned>(&self, address: &str) -> AdminResult<R> {
        let value = self.transport.fetch(address).await?;
        serde_json::from_value(value).map_err(|source| AdminError::Decode {
            address: address.to_string(),
            source,
        })
    }

    pub(crate) async fn create<B: Serialize + Sync>(
        &self,
        address: &str,
        body: &B,
    ) -> AdminResult<Option<String>> {
        self.transport.create(address, &encode(body)?).await
    }

    /// Creates an entity and dereferences the returned location.
    ///
    /// The fetched record is authoritative: the server may have assigned ids
    /// or filled in defaults the request never carried.
    pub(crate) async fn create_and_fetch<B, R>(&self, address: &str, body: &B) -> AdminResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let location = self
            .create(address, body)
            .await?
            .ok_or_else(|| AdminError::MissingLocation {
                address: address.to_string(),
            })?;
        self.fetch(&location).await
    }

    pub(crate) async fn replace<B: Serialize + Sync>(
        &self,
        address: &str,
        body: Option<&B>,
    ) -> AdminResult<()> {
        let body = body.map(encode).transpose()?;
        self.transport.replace(address, body.as_ref()).await
    }

    pub(crate) async fn remove<B: Serialize + Sync>(
        &self,
        address: &str,
        body: Option<&B>,
    ) -> AdminResult<()> {
        let body = body.map(encode).transpose()?;
        self.transport.remove(address, body.as_ref()).await
    }
}

fn encode<B: Serialize>(body: &B) -> AdminResult<Value> {
    serde_json::to_value(body).map_err(AdminError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_header() {
        // base64("admin-cli:s3cr3t")
        assert_eq!(
            basic_authorization("admin-cli", "s3cr3t"),
            "Basic YWRtaW4tY2xpOnMzY3IzdA=="
        );
    }

    #[test]
    fn config_defaults() {
        let config = SessionConfig::new("https://kc.test", "master");

        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.endpoints, Endpoints::default());
    }
}
