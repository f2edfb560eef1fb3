//! In-memory transport for tests.
//!
//! Available to other crates through the `testing` feature.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AdminError, AdminResult};
use crate::transport::Transport;

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// HTTP verb the call maps to.
    pub verb: &'static str,
    /// Expanded address.
    pub address: String,
    /// Request body, if any.
    pub body: Option<Value>,
}

/// Canned answer for one call.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Successful fetch with this body.
    Json(Value),
    /// Successful create returning this location.
    Location(String),
    /// Bare status; anything outside the operation's accepted set fails.
    Status(u16),
}

/// Records every call and answers from a per-address script.
///
/// Unscripted fetches answer 404; unscripted mutations succeed. When several
/// replies are queued for one call they are served in order and the last one
/// repeats.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    script: Mutex<HashMap<(&'static str, String), VecDeque<Reply>>>,
}

impl RecordingTransport {
    /// Creates a transport with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `reply` for calls with `verb` on `address`.
    #[must_use]
    pub fn on(self, verb: &'static str, address: &str, reply: Reply) -> Self {
        lock(&self.script)
            .entry((verb, address.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    /// Every non-GET call so far, in order.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.verb != "GET")
            .collect()
    }

    fn answer(&self, verb: &'static str, address: &str, body: Option<&Value>) -> Option<Reply> {
        lock(&self.calls).push(Call {
            verb,
            address: address.to_string(),
            body: body.cloned(),
        });
        let mut script = lock(&self.script);
        let queue = script.get_mut(&(verb, address.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn rejected(operation: &'static str, address: &str, status: u16) -> AdminError {
    AdminError::UnexpectedStatus {
        operation,
        address: address.to_string(),
        status,
        body: String::new(),
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn fetch(&self, address: &str) -> AdminResult<Value> {
        match self.answer("GET", address, None) {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(200)) => Ok(Value::Null),
            Some(Reply::Status(status)) => Err(rejected("fetch", address, status)),
            _ => Err(rejected("fetch", address, 404)),
        }
    }

    async fn create(&self, address: &str, body: &Value) -> AdminResult<Option<String>> {
        match self.answer("POST", address, Some(body)) {
            Some(Reply::Location(location)) => Ok(Some(location)),
            Some(Reply::Status(201 | 204)) | None => Ok(None),
            Some(Reply::Status(status)) => Err(rejected("create", address, status)),
            Some(Reply::Json(_)) => Ok(None),
        }
    }

    async fn replace(&self, address: &str, body: Option<&Value>) -> AdminResult<()> {
        match self.answer("PUT", address, body) {
            Some(Reply::Status(status)) if status != 204 => {
                Err(rejected("replace", address, status))
            }
            _ => Ok(()),
        }
    }

    async fn remove(&self, address: &str, body: Option<&Value>) -> AdminResult<()> {
        match self.answer("DELETE", address, body) {
            Some(Reply::Status(status)) if status != 204 => {
                Err(rejected("remove", address, status))
            }
            _ => Ok(()),
        }
    }
}
