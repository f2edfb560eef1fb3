//! Group membership gateway.
//!
//! Membership is a link between one user and one group; links are added and
//! removed one at a time.

use std::collections::BTreeSet;

use crate::error::AdminResult;
use crate::representation::UserRepresentation;
use crate::session::Session;
use crate::transport::Transport;

/// Page size for member listings; the server caps unpaged listings at 100.
pub const MEMBER_PAGE_SIZE: usize = 100;

/// Members of groups, addressed by user and group id.
#[derive(Debug)]
pub struct MembershipGateway<'s, T> {
    session: &'s Session<T>,
}

impl<'s, T: Transport> MembershipGateway<'s, T> {
    pub(crate) const fn new(session: &'s Session<T>) -> Self {
        Self { session }
    }

    fn link(&self, realm: &str, group: &str, user: &str) -> String {
        self.session.address(
            &self.session.endpoints().user_group,
            &[("realm", realm), ("user", user), ("group", group)],
        )
    }

    /// Ids of the users currently in `group`.
    ///
    /// Pages through the listing until a short page comes back.
    ///
    /// ## Errors
    ///
    /// Any transport or decode failure.
    pub async fn members(&self, realm: &str, group: &str) -> AdminResult<BTreeSet<String>> {
        let address = self.session.address(
            &self.session.endpoints().group_members,
            &[("realm", realm), ("group", group)],
        );
        let mut members = BTreeSet::new();
        let mut first = 0;
        loop {
            let page = format!("{address}?first={first}&max={MEMBER_PAGE_SIZE}");
            let users: Vec<UserRepresentation> = self.session.fetch(&page).await?;
            let count = users.len();
            members.extend(users.into_iter().filter_map(|user| user.id.into_option()));
            if count < MEMBER_PAGE_SIZE {
                return Ok(members);
            }
            first += count;
        }
    }

    /// Puts `user` into `group`.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn add(&self, realm: &str, group: &str, user: &str) -> AdminResult<()> {
        self.session
            .replace::<()>(&self.link(realm, group, user), None)
            .await
    }

    /// Takes `user` out of `group`.
    ///
    /// ## Errors
    ///
    /// Any transport failure.
    pub async fn remove(&self, realm: &str, group: &str, user: &str) -> AdminResult<()> {
        self.session
            .remove::<()>(&self.link(realm, group, user), None)
            .await
    }
}
