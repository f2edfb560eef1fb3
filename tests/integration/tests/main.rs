//! End-to-End Integration Tests
//!
//! These tests drive the real HTTP transport against a mock admin API
//! served by `wiremock`.

mod common;
mod reconcile_flow;
mod session_login;
mod transport_contract;
