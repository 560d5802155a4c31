//! Generic resource-facade machinery.
//!
//! This module provides the building blocks every typed resource client is
//! made of, independent of which resource it manages.
//!
//! # Main Components
//!
//! - [`Caller`] / [`AsyncCaller`] - The capability contract a transport implements
//! - [`Version`] / [`VersionGate`] / [`Namespace`] - Wire method name selection by appliance release
//! - [`params`] - Parameter encoder conventions (omit-if-zero, three-state, inverted flags)
//! - [`wire`] - Response decoder conventions (nullable, property wrappers, hold counts)
//! - [`ClientError`] / [`is_not_found`] - Error taxonomy and the not-found classifier
//! - [`Resource`] - Trait that resource types implement
//! - [`ResourceClient`] - Generic create/get/list/update/delete orchestrator
//! - [`ResourceService`] - Default operations shared by the typed clients
//!
//! # Testing
//!
//! See [`mock`] for a scripted caller to test clients without a transport.

pub mod caller;
pub mod client;
pub mod error;
pub mod mock;
pub mod params;
pub mod resource;
pub mod service;
pub mod version;
pub mod wire;

pub use caller::{AsyncCaller, Caller};
pub use client::ResourceClient;
pub use error::{absent_if_not_found, is_not_found, CallError, ClientError};
pub use params::Filter;
pub use resource::{Lookup, Resource, Updatable};
pub use service::ResourceService;
pub use version::{Namespace, Version, VersionGate, VersionParseError};
