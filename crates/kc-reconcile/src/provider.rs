//! Host boundary.
//!
//! A host supplies desired records and stores whatever the driver observed.
//! How the host gets its records (configuration files, a plugin runtime, a
//! test fixture) is invisible to the driver.

use kc_admin_client::{AdminResult, Transport};

use crate::driver::{Operation, Outcome, Reconciler, Resource};

/// One unit of work handed to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<R> {
    /// Step to run.
    pub operation: Operation,
    /// Desired entity.
    pub resource: R,
}

impl<R> Request<R> {
    /// Creates a request.
    #[must_use]
    pub const fn new(operation: Operation, resource: R) -> Self {
        Self {
            operation,
            resource,
        }
    }
}

/// Observed state produced for resource `R`.
pub type StateOf<T, R> = <R as Resource<T>>::State;

/// Source of desired state and sink for observed state.
pub trait DesiredStateProvider<T: Transport> {
    /// Kind of resource this provider deals in.
    type Resource: Resource<T>;

    /// Next request, or `None` when there is nothing left to do.
    fn next_request(&mut self) -> Option<Request<Self::Resource>>;

    /// Receives the outcome of a completed request.
    fn observe(
        &mut self,
        request: Request<Self::Resource>,
        outcome: Outcome<StateOf<T, Self::Resource>>,
    );
}

/// Runs every request `provider` hands out, one at a time.
///
/// Stops at the first failure; requests after it are not pulled.
///
/// ## Errors
///
/// The failing request's error, unchanged.
pub async fn drive<T, P>(reconciler: &Reconciler<T>, provider: &mut P) -> AdminResult<usize>
where
    T: Transport,
    P: DesiredStateProvider<T>,
{
    let mut completed = 0;
    while let Some(request) = provider.next_request() {
        let outcome = reconciler.run(request.operation, &request.resource).await?;
        provider.observe(request, outcome);
        completed += 1;
    }
    tracing::debug!(completed, "desired state drained");
    Ok(completed)
}
