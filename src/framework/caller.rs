//! # Capability Contract
//!
//! The only thing the facade needs from a transport: "invoke a named remote
//! method with parameters, get back structured data or an error".
//!
//! Capabilities are layered. [`Caller`] is the base every resource client
//! requires. [`AsyncCaller`] adds job submission for methods the appliance
//! runs as long-lived jobs. Clients only demand the richer capability on the
//! operations that need it, so a transport that cannot wait on jobs still
//! gets full CRUD.
//!
//! Neither trait says anything about retries, authentication or pooling.
//! Those live in the implementation.

use crate::framework::error::CallError;
use async_trait::async_trait;
use serde_json::Value;

/// Base capability: a single remote call.
///
/// Implementations must tolerate concurrent calls from many clients at once.
/// `params` is one of the shapes the facade emits: `null`, a bare scalar,
/// an `[id, options]` pair, a map of named fields, or a filter list.
#[async_trait]
pub trait Caller: Send + Sync {
    async fn call(&self, method: &str, params: Value) -> Result<Value, CallError>;
}

/// Job capability: submit a job-backed method and wait for its result.
#[async_trait]
pub trait AsyncCaller: Caller {
    async fn call_and_wait(&self, method: &str, params: Value) -> Result<Value, CallError>;
}
