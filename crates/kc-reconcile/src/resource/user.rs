use async_trait::async_trait;
use kc_admin_client::{AdminError, AdminResult, Session, Transport, UserRepresentation};

use super::existing_id;
use crate::driver::Resource;

/// A user account, keyed by server id once created.
///
/// The username is fixed at creation. Required actions only take effect on
/// creation and are left out of updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredUser {
    /// Realm name.
    pub realm: String,
    /// Desired record.
    pub user: UserRepresentation,
}

impl DesiredUser {
    /// Wraps a desired user record.
    #[must_use]
    pub fn new(realm: impl Into<String>, user: UserRepresentation) -> Self {
        Self {
            realm: realm.into(),
            user,
        }
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredUser {
    type State = UserRepresentation;

    fn kind(&self) -> &'static str {
        "user"
    }

    fn key(&self) -> String {
        format!("{}/{}", self.realm, self.user.username)
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<UserRepresentation> {
        session.users().create(&self.realm, &self.user).await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<UserRepresentation> {
        let id = existing_id(&self.user.id, "user")?;
        session.users().get(&self.realm, id).await
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<UserRepresentation> {
        let id = existing_id(&self.user.id, "user")?;
        let users = session.users();

        let current = users.get(&self.realm, id).await?;
        if current.username != self.user.username {
            return Err(AdminError::validation(format!(
                "username cannot change from '{}' to '{}'",
                current.username, self.user.username
            )));
        }

        let user = UserRepresentation {
            required_actions: Vec::new(),
            ..self.user.clone()
        };
        users.update(&self.realm, &user).await?;
        users.get(&self.realm, id).await
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        let id = existing_id(&self.user.id, "user")?;
        session.users().delete(&self.realm, id).await
    }
}

#[cfg(test)]
mod tests {
    use kc_admin_client::testing::{RecordingTransport, Reply};
    use kc_admin_client::{Field, Session};
    use serde_json::json;

    use super::*;
    use crate::driver::{Operation, Reconciler};

    const USER: &str = "http://kc/auth/admin/realms/acme/users/u-1";

    fn desired(username: &str) -> DesiredUser {
        let mut user = UserRepresentation::new(username, "jdoe@example.com");
        user.id = Field::Value("u-1".to_string());
        user.required_actions = vec!["UPDATE_PASSWORD".to_string()];
        DesiredUser::new("acme", user)
    }

    #[tokio::test]
    async fn username_change_is_rejected_before_writing() {
        let transport = RecordingTransport::new()
            .on("GET", USER, Reply::Json(json!({"id": "u-1", "username": "jdoe"})));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));

        let err = reconciler
            .run(Operation::Update, &desired("john"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(reconciler.session().transport().mutations().is_empty());
    }

    #[tokio::test]
    async fn update_leaves_out_required_actions() {
        let transport = RecordingTransport::new()
            .on("GET", USER, Reply::Json(json!({"id": "u-1", "username": "jdoe"})));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));

        reconciler
            .run(Operation::Update, &desired("jdoe"))
            .await
            .unwrap();

        let mutations = reconciler.session().transport().mutations();
        let body = mutations[0].body.as_ref().unwrap();
        assert!(body.get("requiredActions").is_none());
    }

    #[tokio::test]
    async fn create_sends_required_actions() {
        let users = "http://kc/auth/admin/realms/acme/users";
        let transport = RecordingTransport::new()
            .on("POST", users, Reply::Location(USER.to_string()))
            .on("GET", USER, Reply::Json(json!({"id": "u-1", "username": "jdoe"})));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let mut new_user = desired("jdoe");
        new_user.user.id = Field::Unset;

        let outcome = reconciler.run(Operation::Create, &new_user).await.unwrap();

        let mutations = reconciler.session().transport().mutations();
        assert_eq!(
            mutations[0].body.as_ref().and_then(|body| body.get("requiredActions")),
            Some(&json!(["UPDATE_PASSWORD"]))
        );
        assert_eq!(
            outcome.state().and_then(|user| user.id.value().cloned()),
            Some("u-1".to_string())
        );
    }
}
