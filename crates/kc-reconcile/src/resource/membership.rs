use std::collections::BTreeSet;

use async_trait::async_trait;
use kc_admin_client::{AdminResult, Session, Transport};

use crate::delta::{reconcile, SetDelta};
use crate::driver::Resource;

/// The exact set of users belonging to one group.
///
/// Users outside the desired set are taken out of the group on update, and
/// every current member is unlinked on delete. The group itself is never
/// touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredGroupMembership {
    /// Realm name.
    pub realm: String,
    /// Server id of the group.
    pub group: String,
    /// Ids of the users that should be members.
    pub members: BTreeSet<String>,
}

impl DesiredGroupMembership {
    /// Creates a desired membership set.
    #[must_use]
    pub fn new<I, S>(realm: impl Into<String>, group: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            realm: realm.into(),
            group: group.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Links are severed before new ones are made.
    async fn apply<T: Transport>(
        &self,
        session: &Session<T>,
        delta: &SetDelta<String>,
    ) -> AdminResult<()> {
        let memberships = session.memberships();
        for user in &delta.to_remove {
            memberships.remove(&self.realm, &self.group, user).await?;
        }
        for user in &delta.to_add {
            memberships.add(&self.realm, &self.group, user).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Transport> Resource<T> for DesiredGroupMembership {
    type State = BTreeSet<String>;

    fn kind(&self) -> &'static str {
        "group membership"
    }

    fn key(&self) -> String {
        format!("{}/{}", self.realm, self.group)
    }

    async fn create(&self, session: &Session<T>) -> AdminResult<BTreeSet<String>> {
        let delta = reconcile(BTreeSet::new(), self.members.iter().cloned());
        self.apply(session, &delta).await?;
        session.memberships().members(&self.realm, &self.group).await
    }

    async fn read(&self, session: &Session<T>) -> AdminResult<BTreeSet<String>> {
        session.memberships().members(&self.realm, &self.group).await
    }

    async fn update(&self, session: &Session<T>) -> AdminResult<BTreeSet<String>> {
        let memberships = session.memberships();
        let current = memberships.members(&self.realm, &self.group).await?;
        let delta = reconcile(current, self.members.iter().cloned());
        if delta.is_empty() {
            tracing::debug!(group = %self.group, "membership already converged");
        } else {
            tracing::debug!(
                group = %self.group,
                adding = delta.to_add.len(),
                removing = delta.to_remove.len(),
                "converging membership"
            );
            self.apply(session, &delta).await?;
        }
        memberships.members(&self.realm, &self.group).await
    }

    async fn delete(&self, session: &Session<T>) -> AdminResult<()> {
        let current = session
            .memberships()
            .members(&self.realm, &self.group)
            .await?;
        let delta = reconcile(current, BTreeSet::new());
        self.apply(session, &delta).await
    }
}

#[cfg(test)]
mod tests {
    use kc_admin_client::testing::{RecordingTransport, Reply};
    use kc_admin_client::Session;
    use serde_json::json;

    use super::*;
    use crate::driver::{Operation, Outcome, Reconciler};

    const MEMBERS: &str = "http://kc/auth/admin/realms/acme/groups/g-1/members?first=0&max=100";

    fn link(user: &str) -> String {
        format!("http://kc/auth/admin/realms/acme/users/{user}/groups/g-1")
    }

    fn members(ids: &[&str]) -> Reply {
        Reply::Json(ids.iter().map(|id| json!({"id": id, "username": id})).collect())
    }

    #[tokio::test]
    async fn unchanged_membership_is_idempotent() {
        let transport = RecordingTransport::new().on("GET", MEMBERS, members(&["u-2", "u-1"]));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredGroupMembership::new("acme", "g-1", ["u-1", "u-2"]);

        let outcome = reconciler.run(Operation::Update, &desired).await.unwrap();

        assert!(reconciler.session().transport().mutations().is_empty());
        assert_eq!(outcome, Outcome::Updated(desired.members));
    }

    #[tokio::test]
    async fn update_removes_then_adds() {
        let transport = RecordingTransport::new()
            .on("GET", MEMBERS, members(&["u-1", "u-2"]))
            .on("GET", MEMBERS, members(&["u-2", "u-3"]));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredGroupMembership::new("acme", "g-1", ["u-2", "u-3"]);

        let outcome = reconciler.run(Operation::Update, &desired).await.unwrap();

        let mutations = reconciler.session().transport().mutations();
        assert_eq!(mutations.len(), 2);
        assert_eq!((mutations[0].verb, mutations[0].address.clone()), ("DELETE", link("u-1")));
        assert_eq!((mutations[1].verb, mutations[1].address.clone()), ("PUT", link("u-3")));
        assert_eq!(outcome.into_state(), Some(desired.members));
    }

    #[tokio::test]
    async fn create_links_every_member_then_rereads() {
        let transport = RecordingTransport::new().on("GET", MEMBERS, members(&["u-1", "u-2"]));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredGroupMembership::new("acme", "g-1", ["u-2", "u-1"]);

        let outcome = reconciler.run(Operation::Create, &desired).await.unwrap();

        let calls = reconciler.session().transport().calls();
        let shape: Vec<_> = calls.iter().map(|call| (call.verb, call.address.clone())).collect();
        assert_eq!(
            shape,
            [
                ("PUT", link("u-1")),
                ("PUT", link("u-2")),
                ("GET", MEMBERS.to_string()),
            ]
        );
        assert_eq!(outcome, Outcome::Created(desired.members));
    }

    #[tokio::test]
    async fn update_sees_members_past_the_first_page() {
        let first_page: Vec<String> = (0..100).map(|n| format!("u-{n:03}")).collect();
        let ids: Vec<&str> = first_page.iter().map(String::as_str).collect();
        let second_page = MEMBERS.replace("first=0", "first=100");
        let transport = RecordingTransport::new()
            .on("GET", MEMBERS, members(&ids))
            .on("GET", &second_page, members(&["u-stray"]));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredGroupMembership::new("acme", "g-1", ids.iter().copied());

        reconciler.run(Operation::Update, &desired).await.unwrap();

        let mutations = reconciler.session().transport().mutations();
        assert_eq!(mutations.len(), 1);
        assert_eq!((mutations[0].verb, mutations[0].address.clone()), ("DELETE", link("u-stray")));
    }

    #[tokio::test]
    async fn delete_unlinks_every_member() {
        let transport = RecordingTransport::new().on("GET", MEMBERS, members(&["u-1", "u-2"]));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredGroupMembership::new("acme", "g-1", ["u-1"]);

        reconciler.run(Operation::Delete, &desired).await.unwrap();

        let mutations = reconciler.session().transport().mutations();
        assert_eq!(mutations.len(), 2);
        assert!(mutations.iter().all(|call| call.verb == "DELETE"));
    }

    #[tokio::test]
    async fn failed_removal_aborts_before_adding() {
        let transport = RecordingTransport::new()
            .on("GET", MEMBERS, members(&["u-1"]))
            .on("DELETE", &link("u-1"), Reply::Status(403));
        let reconciler = Reconciler::new(Session::new(transport, "http://kc", "acme"));
        let desired = DesiredGroupMembership::new("acme", "g-1", ["u-9"]);

        let err = reconciler.run(Operation::Update, &desired).await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(reconciler.session().transport().mutations().len(), 1);
    }
}
