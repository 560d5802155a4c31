//! Building and observing an appliance session.
//!
//! # Main Components
//!
//! - [`Appliance`] - Negotiates the release and wires every typed client onto one caller
//! - [`ApplianceConfig`] - Optional pinned release
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod appliance;
pub mod tracing;

pub use self::appliance::*;
pub use self::tracing::*;
