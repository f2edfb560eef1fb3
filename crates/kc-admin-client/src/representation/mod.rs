//! Wire representations of admin API entities.
//!
//! These mirror the JSON documents the server accepts and returns. Optional
//! scalars use [`Field`] so that "not set" never collapses into `false`/`0`.

pub mod client;
pub mod field;
pub mod group;
pub mod realm;
pub mod role;
pub mod user;

pub use client::{ClientRepresentation, ClientSecret};
pub use field::Field;
pub use group::GroupRepresentation;
pub use realm::{RealmRepresentation, SmtpSettings, SslRequired};
pub use role::{RoleReference, RoleRepresentation, RoleScope};
pub use user::UserRepresentation;
