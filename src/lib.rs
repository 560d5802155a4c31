//! # Appliance Client
//!
//! > **Typed resources over an appliance's JSON management RPC.**
//!
//! This crate turns a single capability, "call a named method with JSON
//! parameters", into type-safe clients for the objects a storage and
//! virtualization appliance manages: users, groups, datasets, snapshots,
//! network interfaces, containers, virtual machines and cron jobs.
//!
//! ## Design Philosophy
//!
//! Every resource is driven by the same generic orchestrator. What differs
//! per resource (method namespace, lookup style, wire format, options) is
//! declared once on a type implementing [`Resource`](framework::Resource),
//! and the CRUD sequencing is written once in
//! [`ResourceClient`](framework::ResourceClient).
//!
//! - **Read-after-write**: create and update always return the object as a
//!   follow-up fetch sees it, never the partial write response.
//! - **Absence is not an error**: `get` returns `Ok(None)` for a missing
//!   object, `list` returns an empty `Vec`, failures return `Err`.
//! - **No hidden state**: clients hold an `Arc` to the caller and the
//!   negotiated release. Nothing is cached.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Capability traits, version gate, encoder/decoder conventions, error
//! classification and the generic orchestrator.
//! - **Key items**: [`Caller`](framework::Caller), [`Resource`](framework::Resource),
//!   [`ResourceClient`](framework::ResourceClient), [`MockCaller`](framework::mock::MockCaller).
//!
//! ### 2. The Data ([`model`])
//! Domain objects, options values and wire records per resource.
//!
//! ### 3. The Interface ([`clients`])
//! One typed client per resource, adding secondary lookups and verbs.
//! - **Key items**: [`SnapshotClient`](clients::SnapshotClient), [`VmClient`](clients::VmClient).
//!
//! ### 4. The Session ([`lifecycle`])
//! [`Appliance`](lifecycle::Appliance) negotiates the release and wires all
//! clients onto one caller. See [`lifecycle::tracing`] for log setup.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;

#[doc(hidden)]
pub use paste::paste as __paste;
