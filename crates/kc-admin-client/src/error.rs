//! Admin client error types.

use thiserror::Error;

/// Errors raised while talking to the Keycloak admin API.
///
/// Every remote failure is terminal: nothing here is retried or downgraded,
/// the offending status and body are handed back to the caller verbatim.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived with a status outside the accepted set.
    #[error("could not {operation} {address}: {body} ({status})")]
    UnexpectedStatus {
        /// Verb-shaped operation name (`fetch`, `create`, ...).
        operation: &'static str,
        /// Address the request was sent to.
        address: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A response body did not match the expected shape.
    #[error("could not decode response from {address}: {source}")]
    Decode {
        /// Address the body came from.
        address: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be encoded.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A create succeeded but the server did not say where the entity lives.
    #[error("create at {address} returned no Location header")]
    MissingLocation {
        /// Address the create was sent to.
        address: String,
    },

    /// Domain-level lookup miss (e.g. a role name with no match).
    #[error("{resource_type} {id} not found")]
    NotFound {
        /// Kind of resource looked up.
        resource_type: &'static str,
        /// Name or id that was searched for.
        id: String,
    },

    /// Locally detectable problem, raised before any request is sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The token endpoint rejected the client credentials.
    #[error("keycloak login failed: {body} ({status})")]
    Authentication {
        /// HTTP status code from the token endpoint.
        status: u16,
        /// Raw response body text.
        body: String,
    },
}

impl AdminError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Checks if this is a domain-level not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks if this error was raised locally, before touching the server.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status carried by the error, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::Authentication { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Result type for admin client operations.
pub type AdminResult<T> = Result<T, AdminError>;
