//! Reconciliation driver.
//!
//! Every entity goes through exactly one of four steps and ends in the
//! matching [`Outcome`]. Nothing is persisted between steps; the first
//! failing call aborts the step and its error is returned unchanged. A
//! half-applied relationship update is left as is, and running the step
//! again converges because it starts by re-reading live state.

use std::fmt;

use async_trait::async_trait;
use kc_admin_client::{AdminResult, Session, Transport};

/// What to do with one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create it, then read back the server's copy.
    Create,
    /// Read its live state.
    Read,
    /// Resend the full desired record and converge relationships.
    Update,
    /// Remove it, unlinking relationships first where needed.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Terminal result of a driver step, carrying the observed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S> {
    /// Live state as read.
    Read(S),
    /// Canonical state after creation.
    Created(S),
    /// Canonical state after the update.
    Updated(S),
    /// The entity is gone.
    Deleted,
}

impl<S> Outcome<S> {
    /// Observed state, unless the entity was deleted.
    #[must_use]
    pub const fn state(&self) -> Option<&S> {
        match self {
            Self::Read(state) | Self::Created(state) | Self::Updated(state) => Some(state),
            Self::Deleted => None,
        }
    }

    /// Takes the observed state, unless the entity was deleted.
    #[must_use]
    pub fn into_state(self) -> Option<S> {
        match self {
            Self::Read(state) | Self::Created(state) | Self::Updated(state) => Some(state),
            Self::Deleted => None,
        }
    }

    /// Operation that produced this outcome.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Read(_) => Operation::Read,
            Self::Created(_) => Operation::Create,
            Self::Updated(_) => Operation::Update,
            Self::Deleted => Operation::Delete,
        }
    }
}

/// A desired entity the driver knows how to converge.
///
/// Implementations issue gateway calls only; sequencing, logging and
/// outcome wrapping live in [`Reconciler::run`].
#[async_trait]
pub trait Resource<T: Transport>: Send + Sync {
    /// Canonical state handed back to the host.
    type State: Send;

    /// Entity kind, for logs.
    fn kind(&self) -> &'static str;

    /// Human-readable key of this entity, for logs.
    fn key(&self) -> String;

    /// Creates the entity and returns its canonical state.
    async fn create(&self, session: &Session<T>) -> AdminResult<Self::State>;

    /// Reads the live state.
    async fn read(&self, session: &Session<T>) -> AdminResult<Self::State>;

    /// Converges the live entity to the desired one.
    async fn update(&self, session: &Session<T>) -> AdminResult<Self::State>;

    /// Removes the entity.
    async fn delete(&self, session: &Session<T>) -> AdminResult<()>;
}

/// Runs driver steps against one session.
#[derive(Debug, Clone)]
pub struct Reconciler<T> {
    session: Session<T>,
}

impl<T: Transport> Reconciler<T> {
    /// Creates a reconciler owning `session`.
    #[must_use]
    pub const fn new(session: Session<T>) -> Self {
        Self { session }
    }

    /// Session the steps run against.
    #[must_use]
    pub const fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Runs one step for `resource`.
    ///
    /// ## Errors
    ///
    /// The first failing gateway call, unchanged.
    pub async fn run<R: Resource<T>>(
        &self,
        operation: Operation,
        resource: &R,
    ) -> AdminResult<Outcome<R::State>> {
        let session = &self.session;
        let result = match operation {
            Operation::Create => resource.create(session).await.map(Outcome::Created),
            Operation::Read => resource.read(session).await.map(Outcome::Read),
            Operation::Update => resource.update(session).await.map(Outcome::Updated),
            Operation::Delete => resource.delete(session).await.map(|()| Outcome::Deleted),
        };

        match &result {
            Ok(_) => tracing::info!(
                kind = resource.kind(),
                key = %resource.key(),
                %operation,
                "reconciled"
            ),
            Err(e) => tracing::warn!(
                kind = resource.kind(),
                key = %resource.key(),
                %operation,
                error = %e,
                "reconciliation failed"
            ),
        }
        result
    }
}
