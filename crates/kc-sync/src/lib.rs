//! # kc-sync
//!
//! Operator CLI for reconciling Keycloak entities.
//!
//! This crate provides command-line utilities for:
//! - Reading realms, clients, roles, users and groups
//! - Converging composite roles and group membership to a given set
//! - Mapping roles to users
//! - Managing the `~/.keycloak/kc-sync.toml` configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
