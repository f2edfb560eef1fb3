//! Authenticated transport.
//!
//! Four verb-shaped primitives over the admin API with a uniform status
//! contract:
//!
//! | Operation | Verb | Accepted status |
//! |-----------|------|-----------------|
//! | `fetch`   | GET    | 200 |
//! | `create`  | POST   | 201, 204 |
//! | `replace` | PUT    | 204 |
//! | `remove`  | DELETE | 204 |
//!
//! Anything else is an [`AdminError::UnexpectedStatus`] carrying the status
//! and raw body. Nothing is cached or retried.

use std::fmt;

use async_trait::async_trait;
use reqwest::{header, Method, RequestBuilder, Response};
use serde_json::Value;

use crate::error::{AdminError, AdminResult};

const FETCH_ACCEPTS: &[u16] = &[200];
const CREATE_ACCEPTS: &[u16] = &[201, 204];
const REPLACE_ACCEPTS: &[u16] = &[204];
const REMOVE_ACCEPTS: &[u16] = &[204];

/// Stands in for an error body that could not be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

/// Verb-shaped access to the admin API.
///
/// Bodies travel as JSON values; typed encoding and decoding happens one
/// layer up so that the trait stays object-safe and easy to fake in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GETs `address` and returns the decoded body.
    ///
    /// ## Errors
    ///
    /// `UnexpectedStatus` for anything but 200, `Decode` for a non-JSON body.
    async fn fetch(&self, address: &str) -> AdminResult<Value>;

    /// POSTs `body` to `address` and returns the `Location` header verbatim.
    ///
    /// Relationship endpoints answer 204 without a location; `None` is
    /// returned for them.
    ///
    /// ## Errors
    ///
    /// `UnexpectedStatus` for anything but 201 or 204.
    async fn create(&self, address: &str, body: &Value) -> AdminResult<Option<String>>;

    /// PUTs the complete record (or nothing) to `address`.
    ///
    /// ## Errors
    ///
    /// `UnexpectedStatus` for anything but 204.
    async fn replace(&self, address: &str, body: Option<&Value>) -> AdminResult<()>;

    /// DELETEs `address`, optionally describing what to unlink in the body.
    ///
    /// ## Errors
    ///
    /// `UnexpectedStatus` for anything but 204.
    async fn remove(&self, address: &str, body: Option<&Value>) -> AdminResult<()>;
}

/// [`Transport`] over HTTP, authenticating every request with a bearer token.
///
/// The token is fixed for the lifetime of the transport; pick up a renewed
/// token by logging in again.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    token: String,
}

impl HttpTransport {
    /// Creates a transport that sends `token` on every request.
    #[must_use]
    pub fn new(client: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    fn request(&self, method: Method, address: &str) -> RequestBuilder {
        self.client.request(method, address).bearer_auth(&self.token)
    }

    async fn send(
        &self,
        operation: &'static str,
        accepted: &[u16],
        request: RequestBuilder,
        address: &str,
    ) -> AdminResult<Response> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        tracing::debug!(operation, address, status, "admin API response");

        if accepted.contains(&status) {
            Ok(response)
        } else {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(operation, address, status, error = %e, "unreadable error body");
                    UNREADABLE_BODY.to_string()
                }
            };
            Err(AdminError::UnexpectedStatus {
                operation,
                address: address.to_string(),
                status,
                body,
            })
        }
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, address: &str) -> AdminResult<Value> {
        let request = self.request(Method::GET, address);
        let response = self.send("fetch", FETCH_ACCEPTS, request, address).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|source| AdminError::Decode {
            address: address.to_string(),
            source,
        })
    }

    async fn create(&self, address: &str, body: &Value) -> AdminResult<Option<String>> {
        let request = self.request(Method::POST, address).json(body);
        let response = self.send("create", CREATE_ACCEPTS, request, address).await?;

        Ok(response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string))
    }

    async fn replace(&self, address: &str, body: Option<&Value>) -> AdminResult<()> {
        let mut request = self.request(Method::PUT, address);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send("replace", REPLACE_ACCEPTS, request, address)
            .await
            .map(drop)
    }

    async fn remove(&self, address: &str, body: Option<&Value>) -> AdminResult<()> {
        let mut request = self.request(Method::DELETE, address);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send("remove", REMOVE_ACCEPTS, request, address)
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let transport = HttpTransport::new(reqwest::Client::new(), "eyJhbGciOi.secret");
        let debug = format!("{transport:?}");

        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret"));
    }

    #[tokio::test]
    async fn truncated_error_body_is_replaced() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}/admin/realms/acme", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0_u8; 1024];
            let _ = socket.read(&mut request).await;
            // Promise more body than is sent, then hang up.
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 64\r\n\r\npartial")
                .await
                .unwrap();
        });

        let transport = HttpTransport::new(reqwest::Client::new(), "token");
        let err = transport.fetch(&address).await.unwrap_err();

        assert!(matches!(
            err,
            AdminError::UnexpectedStatus { status: 500, ref body, .. } if body == UNREADABLE_BODY
        ));
    }
}
