//! # Mock Caller
//!
//! [`MockCaller`] implements [`Caller`] and [`AsyncCaller`] from a queue of
//! scripted expectations. It lets tests drive any resource client without a
//! transport and then assert exactly which calls were made, in which order
//! and with which parameters.
//!
//! ## When to use the mock vs a real transport
//!
//! | Feature | MockCaller | Real transport |
//! |---------|------------|----------------|
//! | **Speed** | Instant (in-memory) | Network round trips |
//! | **Determinism** | 100% Deterministic | Depends on the appliance |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Cancellation** | `hang()` never resolves | Timing dependent |
//!
//! ## Example
//!
//! ```rust
//! use appliance_client::clients::UserClient;
//! use appliance_client::framework::mock::MockCaller;
//! use appliance_client::framework::{ResourceClient, ResourceService, Version};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCaller::new();
//!     mock.expect_call("user.query").return_ok(json!([]));
//!
//!     let users = UserClient::new(ResourceClient::new(Arc::new(mock.clone()), Version::new(25, 10)));
//!     assert!(users.get(1000).await.unwrap().is_none());
//!
//!     mock.verify();
//!     assert_eq!(mock.calls()[0].params, json!([["id", "=", 1000]]));
//! }
//! ```

use crate::framework::caller::{AsyncCaller, Caller};
use crate::framework::error::CallError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// How a call reached the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Plain,
    Job,
}

/// A call the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Value,
    pub kind: CallKind,
}

enum Reply {
    Respond(Result<Value, CallError>),
    Hang,
}

struct Expectation {
    method: String,
    kind: CallKind,
    reply: Reply,
}

#[derive(Default)]
struct State {
    expectations: VecDeque<Expectation>,
    calls: Vec<RecordedCall>,
}

/// A scripted caller with expectation tracking.
///
/// Clones share the same script and call log, so a test can keep one handle
/// and give another to the client under test.
#[derive(Clone, Default)]
pub struct MockCaller {
    state: Arc<Mutex<State>>,
}

impl MockCaller {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a plain [`Caller::call`] of `method`.
    pub fn expect_call(&self, method: &str) -> ExpectationBuilder {
        ExpectationBuilder {
            method: method.to_string(),
            kind: CallKind::Plain,
            state: Arc::clone(&self.state),
        }
    }

    /// Expects an [`AsyncCaller::call_and_wait`] of `method`.
    pub fn expect_job(&self, method: &str) -> ExpectationBuilder {
        ExpectationBuilder {
            method: method.to_string(),
            kind: CallKind::Job,
            state: Arc::clone(&self.state),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            let pending: Vec<&str> = state.expectations.iter().map(|e| e.method.as_str()).collect();
            panic!("Not all expectations were met. {} remaining: {:?}", pending.len(), pending);
        }
    }

    async fn answer(&self, method: &str, params: Value, kind: CallKind) -> Result<Value, CallError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(RecordedCall {
                method: method.to_string(),
                params,
                kind,
            });
            match state.expectations.pop_front() {
                Some(exp) if exp.method == method && exp.kind == kind => exp.reply,
                Some(exp) => panic!(
                    "Unexpected call: got {:?} {}, expected {:?} {}",
                    kind, method, exp.kind, exp.method
                ),
                None => panic!("Unexpected call: {:?} {} with no expectations left", kind, method),
            }
        };
        match reply {
            Reply::Respond(result) => result,
            Reply::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl Caller for MockCaller {
    async fn call(&self, method: &str, params: Value) -> Result<Value, CallError> {
        self.answer(method, params, CallKind::Plain).await
    }
}

#[async_trait]
impl AsyncCaller for MockCaller {
    async fn call_and_wait(&self, method: &str, params: Value) -> Result<Value, CallError> {
        self.answer(method, params, CallKind::Job).await
    }
}

/// Builder that finishes an expectation.
pub struct ExpectationBuilder {
    method: String,
    kind: CallKind,
    state: Arc<Mutex<State>>,
}

impl ExpectationBuilder {
    fn push(self, reply: Reply) {
        self.state.lock().unwrap().expectations.push_back(Expectation {
            method: self.method,
            kind: self.kind,
            reply,
        });
    }

    /// Sets the expectation to return a successful response.
    pub fn return_ok(self, response: Value) {
        self.push(Reply::Respond(Ok(response)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CallError) {
        self.push(Reply::Respond(Err(error)));
    }

    /// Sets the expectation to never resolve.
    pub fn hang(self) {
        self.push(Reply::Hang);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mock = MockCaller::new();
        mock.expect_call("system.version").return_ok(json!("25.10.0"));
        mock.expect_job("vm.stop").return_err(CallError::Remote("[EFAULT] busy".into()));

        let version = mock.call("system.version", Value::Null).await.unwrap();
        assert_eq!(version, json!("25.10.0"));

        let err = mock.call_and_wait("vm.stop", json!(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "[EFAULT] busy");

        mock.verify();
        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].kind, CallKind::Job);
        assert_eq!(calls[1].params, json!(3));
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected call")]
    async fn test_mock_rejects_wrong_method() {
        let mock = MockCaller::new();
        mock.expect_call("user.query").return_ok(json!([]));
        let _ = mock.call("group.query", Value::Null).await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mock = MockCaller::new();
        mock.expect_call("user.query").return_ok(json!([]));
        mock.verify();
    }
}
