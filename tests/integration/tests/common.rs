//! Common test utilities and fixtures.

use kc_admin_client::{HttpTransport, Session};
use wiremock::MockServer;

/// Bearer token every test session carries.
pub const TOKEN: &str = "test-token";

/// Realm every test session targets.
pub const REALM: &str = "acme";

/// Mock admin API plus a session pointed at it.
pub struct TestEnv {
    /// Mock server.
    pub server: MockServer,
    /// Session using the real HTTP transport.
    pub session: Session<HttpTransport>,
}

impl TestEnv {
    /// Starts a mock server and opens a session on it without logging in.
    pub async fn new() -> anyhow::Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("kc_admin_client=debug,kc_reconcile=debug")
            .with_test_writer()
            .try_init();

        let server = MockServer::start().await;
        let client = reqwest::Client::builder().build()?;
        let session = Session::new(HttpTransport::new(client, TOKEN), server.uri(), REALM);

        Ok(Self { server, session })
    }

    /// Full address of an admin API path under the realm.
    pub fn admin_path(&self, suffix: &str) -> String {
        format!("/auth/admin/realms/{REALM}{suffix}")
    }

    /// Absolute URL of a path on the mock server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }
}
