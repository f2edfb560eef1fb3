use async_trait::async_trait;
use kc_admin_client::{AdminResult, ClientRepresentation, Session, Transport};

use super::existing_id;
use crate::driver::Resource;

/// A client in a realm, keyed by server id once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredClient {
    /// Realm name.
    pub realm: String,
    /// Desired record.
    pub client: ClientRepresentation,
}

/// A client as observed on the server, with its derived credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedClient {
    /// Canonical record.
    pub client: ClientRepresentation,
    /// Secret, for confidential clients.
    pub secret: Option<String>,
    /// Id of the service-account user, when service accounts are enabled.
    pub service_account_user_id: Option<String>,
}

impl DesiredClient {
    /// Wraps a desired client record.
    #[must_use]
    pub fn new(realm: impl Into<String>, client: ClientRepresentation) -> Self {
        Self {
            realm: realm.into(),
            client,
        }
    }

    async fn observe<T: Transport>(
        &self,
        session: &Session<T>,
        client: ClientRepresentation,
    ) -> AdminResult<ObservedClient> {
        let clients = session.clients();
        let id = existing_id(&client.id, "client")?;

        let secret = if client.is_confidential() {
            Some(clients.secret(&self.realm, id).await?.value)
        } else {
            None
        };
        let service_account_user_id = if client.service_accounts_enabled {
            clients
                .service_account_user(&self.realm, id)
                .await?
                .id
                .into_option()
        } else {
            None
        };

        Ok(ObservedClient {
            client,
            secret,
            service_account_user_id,
        })
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredClient {
    type State = ObservedClient;

    fn kind(&self) -> &'static str {
        "client"
    }

    fn key(&self) -> String {
        format!("{}/{}", self.realm, self.client.client_id)
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<ObservedClient> {
        let created = session.clients().create(&self.realm, &self.client).await?;
        self.observe(session, created).await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<ObservedClient> {
        let id = existing_id(&self.client.id, "client")?;
        let client = session.clients().get(&self.realm, id).await?;
        self.observe(session, client).await
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<ObservedClient> {
        let id = existing_id(&self.client.id, "client")?;
        let clients = session.clients();
        clients.update(&self.realm, &self.client).await?;
        let client = clients.get(&self.realm, id).await?;
        self.observe(session, client).await
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        let id = existing_id(&self.client.id, "client")?;
        session.clients().delete(&self.realm, id).await
    }
}

#[cfg(test)]
mod tests {
    use kc_admin_client::testing::{RecordingTransport, Reply};
    use kc_admin_client::{Field, Session};
    use serde_json::json;

    use super::*;
    use crate::driver::{Operation, Outcome, Reconciler};

    const CLIENTS: &str = "http://kc/auth/admin/realms/acme/clients";

    #[tokio::test]
    async fn create_returns_fetched_record() {
        let location = format!("{CLIENTS}/5f0c");
        let transport = RecordingTransport::new()
            .on("POST", CLIENTS, Reply::Location(location.clone()))
            .on(
                "GET",
                &location,
                Reply::Json(json!({
                    "id": "5f0c",
                    "clientId": "portal",
                    "enabled": true,
                    "publicClient": true,
                    "protocol": "openid-connect"
                })),
            );
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredClient::new("acme", ClientRepresentation::new("portal"));

        let outcome = reconciler.run(Operation::Create, &desired).await.unwrap();

        let calls = reconciler.session().transport().calls();
        let fetches: Vec<_> = calls.iter().filter(|call| call.verb == "GET").collect();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].address, location);
        assert!(calls[0].body.as_ref().is_some_and(|body| body.get("id").is_none()));

        let Outcome::Created(observed) = outcome else {
            panic!("expected a created client");
        };
        assert_eq!(observed.client.id, Field::Value("5f0c".to_string()));
        assert_eq!(observed.client.protocol, Field::Value("openid-connect".to_string()));
        assert_eq!(observed.secret, None);
    }

    #[tokio::test]
    async fn confidential_client_reads_secret_and_service_account() {
        let client = format!("{CLIENTS}/5f0c");
        let transport = RecordingTransport::new()
            .on(
                "GET",
                &client,
                Reply::Json(json!({
                    "id": "5f0c",
                    "clientId": "worker",
                    "publicClient": false,
                    "serviceAccountsEnabled": true
                })),
            )
            .on(
                "GET",
                &format!("{client}/client-secret"),
                Reply::Json(json!({"type": "secret", "value": "s3cr3t"})),
            )
            .on(
                "GET",
                &format!("{client}/service-account-user"),
                Reply::Json(json!({"id": "u-sa", "username": "service-account-worker"})),
            );
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let mut record = ClientRepresentation::new("worker");
        record.id = Field::Value("5f0c".to_string());
        let desired = DesiredClient::new("acme", record);

        let outcome = reconciler.run(Operation::Read, &desired).await.unwrap();

        let observed = outcome.into_state().unwrap();
        assert_eq!(observed.secret.as_deref(), Some("s3cr3t"));
        assert_eq!(observed.service_account_user_id.as_deref(), Some("u-sa"));
    }

    #[tokio::test]
    async fn read_without_id_is_validation_error() {
        let reconciler = Reconciler::new(Session::new(RecordingTransport::new(), "http://kc", "acme"));
        let desired = DesiredClient::new("acme", ClientRepresentation::new("portal"));

        let err = reconciler.run(Operation::Read, &desired).await.unwrap_err();
        assert!(err.is_validation());
    }
}
