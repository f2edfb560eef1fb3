//! # kc-admin-client
//!
//! Typed client for the Keycloak admin REST API.
//!
//! The crate is layered bottom-up:
//!
//! - [`transport`] - four verb-shaped primitives with a strict status contract
//! - [`session`] - client-credentials login and the explicit [`Session`] handle
//! - [`representation`] - wire records, with [`Field`] for optional scalars
//! - [`gateway`] - per-entity get/create/update/delete over a session
//! - [`endpoints`] - overridable address templates
//!
//! ## Quick Start
//!
//! ```ignore
//! use kc_admin_client::{login, SessionConfig, UserRepresentation};
//!
//! let session = login(SessionConfig::new("https://sso.example.com", "master"), "admin-cli", secret).await?;
//! let user = session
//!     .users()
//!     .create("acme", &UserRepresentation::new("jdoe", "jdoe@example.com"))
//!     .await?;
//! ```
//!
//! ## Status contract
//!
//! | Operation | Verb | Accepted status |
//! |-----------|------|-----------------|
//! | fetch     | GET    | 200 |
//! | create    | POST   | 201, 204 |
//! | replace   | PUT    | 204 |
//! | remove    | DELETE | 204 |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod representation;
pub mod session;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use endpoints::{Endpoints, LEGACY_CONTEXT_PATH};
pub use error::{AdminError, AdminResult};
pub use gateway::find_role;
pub use representation::{
    ClientRepresentation, ClientSecret, Field, GroupRepresentation, RealmRepresentation,
    RoleReference, RoleRepresentation, RoleScope, SmtpSettings, SslRequired,
    UserRepresentation,
};
pub use session::{basic_authorization, login, Session, SessionConfig, DEFAULT_TIMEOUT};
pub use transport::{HttpTransport, Transport};
